use serde::Serialize;
use std::path::{Component, Path};

use crate::error::{Error, Result};
use crate::project::ProjectRoot;

/// The two namespace strings a component's files need
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespacePair {
    /// Dotted namespace ending in the entity name, used by markup files
    pub full_namespace: String,
    /// `full_namespace` without its last segment, used by code files
    pub code_namespace: String,
}

impl NamespacePair {
    pub fn from_full(full_namespace: impl Into<String>) -> Self {
        let full_namespace = full_namespace.into();
        let code_namespace = match full_namespace.rfind('.') {
            Some(index) => full_namespace[..index].to_string(),
            None => full_namespace.clone(),
        };
        Self {
            full_namespace,
            code_namespace,
        }
    }
}

/// Turns a directory position inside a project into a namespace
pub struct NamespaceBuilder;

impl NamespaceBuilder {
    /// Build `<Project>.<Seg1>.<Seg2>.<entity>` for `target_dir`.
    ///
    /// The project name prefix is only added for a project root; under a
    /// solution root the first path segment is normally the project folder.
    /// `entity_name` must be non-empty.
    pub fn build(target_dir: &Path, root: &ProjectRoot, entity_name: &str) -> Result<String> {
        let mut segments = Self::relative_segments(target_dir, &root.path)?;
        if !root.is_solution_root && !root.project_name.is_empty() {
            segments.insert(0, root.project_name.clone());
        }
        segments.push(entity_name.to_string());

        let namespace = segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(".");

        if namespace.is_empty() {
            return Err(Error::NamespaceNotConstructible(format!(
                "empty namespace for {}",
                target_dir.display()
            )));
        }

        Ok(namespace)
    }

    pub fn build_pair(
        target_dir: &Path,
        root: &ProjectRoot,
        entity_name: &str,
    ) -> Result<NamespacePair> {
        Self::build(target_dir, root, entity_name).map(NamespacePair::from_full)
    }

    /// Non-empty path segments from `root` down to `target_dir`
    pub fn relative_segments(target_dir: &Path, root: &Path) -> Result<Vec<String>> {
        let relative = target_dir.strip_prefix(root).map_err(|_| {
            Error::NamespaceNotConstructible(format!(
                "{} is not inside the project root {}",
                target_dir.display(),
                root.display()
            ))
        })?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment.to_string_lossy();
                    if !segment.is_empty() {
                        segments.push(segment.into_owned());
                    }
                }
                Component::CurDir => {}
                _ => {
                    return Err(Error::NamespaceNotConstructible(format!(
                        "cannot derive a namespace from {}",
                        relative.display()
                    )));
                }
            }
        }

        Ok(segments)
    }
}
