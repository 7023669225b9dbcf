pub mod init;
pub mod namespace;
pub mod new;

pub use init::init_command;
pub use namespace::namespace_command;
pub use new::new_command;

use anyhow::{Context, Result};
use std::{env, path::PathBuf};

/// `path`, or the current directory when none was given
pub(crate) fn dir_or_cwd(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => env::current_dir().context("Failed to get current directory"),
    }
}
