use anyhow::{Context, Result, bail};
use avalonia_scaffold_core::{
    Config, NamespaceBuilder, ProjectRootLocator, TracingLogger, is_valid_component_name,
};
use std::path::{Path, PathBuf};

use super::dir_or_cwd;
use crate::display::print_namespaces;

pub fn namespace_command(dir: &Path, name: &str, root: Option<PathBuf>, json: bool) -> Result<()> {
    if !is_valid_component_name(name) {
        bail!("'{}' is not a valid class name", name);
    }

    let search_root = dir_or_cwd(root)?
        .canonicalize()
        .context("Failed to canonicalize search root")?;
    let target_dir = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;

    let logger = TracingLogger::new();
    let config =
        Config::discover(&search_root, &logger).context("Failed to load configuration")?;

    let project_root = ProjectRootLocator::new(config.markers()).locate(&search_root, &logger)?;
    let namespaces = NamespaceBuilder::build_pair(&target_dir, &project_root, name)?;

    if json {
        let output = serde_json::json!({
            "project_root": project_root,
            "namespaces": namespaces,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_namespaces(&project_root, &namespaces);
    }

    Ok(())
}
