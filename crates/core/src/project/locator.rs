use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::interfaces::Logger;

/// The directory namespaces are computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRoot {
    pub path: PathBuf,
    /// True when the directory holds a solution file
    pub is_solution_root: bool,
    /// Project file stem; empty for solution roots
    pub project_name: String,
}

/// File-name suffixes that mark a solution or project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMarkers {
    pub solution_suffix: String,
    pub project_suffix: String,
}

impl Default for ProjectMarkers {
    fn default() -> Self {
        Self {
            solution_suffix: ".sln".to_string(),
            project_suffix: ".csproj".to_string(),
        }
    }
}

/// Finds the nearest directory carrying a solution or project file.
///
/// The start directory is checked first. After that its subtree is walked
/// depth-first in pre-order, children sorted by name, and the first
/// directory that qualifies wins. Symlinked directories are not followed.
#[derive(Debug, Clone, Default)]
pub struct ProjectRootLocator {
    markers: ProjectMarkers,
}

impl ProjectRootLocator {
    pub fn new(markers: ProjectMarkers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &ProjectMarkers {
        &self.markers
    }

    pub fn locate(&self, start_dir: &Path, logger: &dyn Logger) -> Result<ProjectRoot> {
        let start = start_dir.display().to_string();
        logger.debug("searching for project root", &[("start", start.as_str())]);

        for entry in WalkDir::new(start_dir)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    logger.warn(
                        "skipping unreadable directory",
                        &[("path", path.as_str()), ("error", err.to_string().as_str())],
                    );
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if let Some(root) = self.inspect(entry.path(), logger) {
                logger.info(
                    "project root located",
                    &[
                        ("path", root.path.display().to_string().as_str()),
                        ("solution", if root.is_solution_root { "true" } else { "false" }),
                        ("project", root.project_name.as_str()),
                    ],
                );
                return Ok(root);
            }
        }

        Err(Error::RootNotFound {
            start: start_dir.to_path_buf(),
        })
    }

    /// Check a single directory's own files for a marker.
    ///
    /// A solution file takes precedence over a project file in the same
    /// directory. Unreadable directories count as unmarked.
    pub fn inspect(&self, dir: &Path, logger: &dyn Logger) -> Option<ProjectRoot> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                logger.warn(
                    "cannot list directory",
                    &[
                        ("path", dir.display().to_string().as_str()),
                        ("error", err.to_string().as_str()),
                    ],
                );
                return None;
            }
        };

        let mut file_names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        file_names.sort();

        if file_names
            .iter()
            .any(|name| name.ends_with(&self.markers.solution_suffix))
        {
            return Some(ProjectRoot {
                path: dir.to_path_buf(),
                is_solution_root: true,
                project_name: String::new(),
            });
        }

        file_names
            .iter()
            .find_map(|name| name.strip_suffix(self.markers.project_suffix.as_str()))
            .map(|project_name| ProjectRoot {
                path: dir.to_path_buf(),
                is_solution_root: false,
                project_name: project_name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{NullLogger, RecordingLogger};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_start_dir_with_project_file() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("App.csproj"));
        // A deeper solution must not win over the start directory
        touch(&temp_dir.path().join("nested/Other.sln"));

        let root = ProjectRootLocator::default()
            .locate(temp_dir.path(), &NullLogger)
            .unwrap();

        assert_eq!(root.path, temp_dir.path());
        assert!(!root.is_solution_root);
        assert_eq!(root.project_name, "App");
    }

    #[test]
    fn test_solution_file_wins_over_project_file() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("App.csproj"));
        touch(&temp_dir.path().join("App.sln"));

        let root = ProjectRootLocator::default()
            .locate(temp_dir.path(), &NullLogger)
            .unwrap();

        assert!(root.is_solution_root);
        assert_eq!(root.project_name, "");
    }

    #[test]
    fn test_finds_marker_in_descendant() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("docs/readme.md"));
        touch(&temp_dir.path().join("src/deep/App/App.csproj"));

        let root = ProjectRootLocator::default()
            .locate(temp_dir.path(), &NullLogger)
            .unwrap();

        assert_eq!(root.path, temp_dir.path().join("src/deep/App"));
        assert_eq!(root.project_name, "App");
    }

    #[test]
    fn test_pre_order_traversal_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        // `a/deep` is visited before `b` because `a` is descended first
        touch(&temp_dir.path().join("a/deep/First.csproj"));
        touch(&temp_dir.path().join("b/Second.csproj"));

        let root = ProjectRootLocator::default()
            .locate(temp_dir.path(), &NullLogger)
            .unwrap();

        assert_eq!(root.project_name, "First");
    }

    #[test]
    fn test_directory_named_like_marker_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("Fake.csproj")).unwrap();
        touch(&temp_dir.path().join("real/Real.csproj"));

        let root = ProjectRootLocator::default()
            .locate(temp_dir.path(), &NullLogger)
            .unwrap();

        assert_eq!(root.project_name, "Real");
    }

    #[test]
    fn test_not_found_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("src/Program.cs"));

        let err = ProjectRootLocator::default()
            .locate(temp_dir.path(), &NullLogger)
            .unwrap_err();

        assert!(matches!(err, Error::RootNotFound { .. }));
        assert!(err.to_string().starts_with("No project found"));
    }

    #[test]
    fn test_missing_start_dir_is_logged_and_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let logger = RecordingLogger::new();

        let err = ProjectRootLocator::default()
            .locate(&temp_dir.path().join("missing"), &logger)
            .unwrap_err();

        assert!(matches!(err, Error::RootNotFound { .. }));
        assert_eq!(logger.find("skipping unreadable directory").len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("a");
        touch(&locked.join("inner/Hidden.csproj"));
        touch(&temp_dir.path().join("b/B.csproj"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let logger = RecordingLogger::new();
        let result = ProjectRootLocator::default().locate(temp_dir.path(), &logger);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let root = result.unwrap();
        assert_eq!(root.path, temp_dir.path().join("b"));
        assert_eq!(root.project_name, "B");
        assert!(
            logger
                .records()
                .iter()
                .any(|record| record.level == tracing::Level::WARN)
        );
    }

    #[test]
    fn test_custom_markers() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("lib/Core.fsproj"));
        let locator = ProjectRootLocator::new(ProjectMarkers {
            solution_suffix: ".slnx".to_string(),
            project_suffix: ".fsproj".to_string(),
        });

        let root = locator.locate(temp_dir.path(), &NullLogger).unwrap();
        assert_eq!(root.project_name, "Core");
    }
}
