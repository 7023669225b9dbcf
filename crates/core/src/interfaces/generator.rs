//! Template generator interface
//!
//! The generator is an external collaborator: it writes the component files
//! into a directory, and the rest of the pipeline rewrites them afterwards.

use serde::Serialize;
use std::path::Path;

use super::Logger;
use crate::error::Result;

/// What a successful generator run reported
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratorOutput {
    pub stdout: String,
    pub stderr: String,
    /// True when the run only succeeded on the forced retry
    pub forced: bool,
}

pub trait ScaffoldGenerator {
    /// Create the files for `template` named `name` inside `cwd`
    fn generate(
        &self,
        template: &str,
        name: &str,
        cwd: &Path,
        logger: &dyn Logger,
    ) -> Result<GeneratorOutput>;

    /// Human-readable form of the invocation, for dry runs
    fn describe(&self, template: &str, name: &str) -> String {
        format!("{template} -n {name}")
    }
}
