use anyhow::{Context, Result};
use avalonia_scaffold_core::{
    ComponentKind, Config, DotnetGenerator, ScaffoldOrchestrator, ScaffoldRequest, TracingLogger,
};
use std::path::PathBuf;
use tracing::debug;

use super::dir_or_cwd;
use crate::display::{print_plan, print_report};

pub fn new_command(
    kind: ComponentKind,
    name: &str,
    dir: Option<PathBuf>,
    root: Option<PathBuf>,
    view_model: bool,
    dry_run: bool,
) -> Result<()> {
    let target_dir = dir_or_cwd(dir)?;
    let search_root = dir_or_cwd(root)?;

    let logger = TracingLogger::new();
    let config =
        Config::discover(&search_root, &logger).context("Failed to load configuration")?;
    debug!("Using config: {:?}", config);

    let generator = DotnetGenerator::from_config(&config);
    let orchestrator = ScaffoldOrchestrator::new(config, generator);
    let request = ScaffoldRequest {
        kind,
        name: name.to_string(),
        target_dir,
        search_root,
        with_view_model: view_model,
    };

    if dry_run {
        let plan = orchestrator
            .plan(&request, &logger)
            .with_context(|| format!("Failed to plan {kind} '{name}'"))?;
        print_plan(&plan);
        return Ok(());
    }

    let report = orchestrator
        .scaffold(&request, &logger)
        .with_context(|| format!("Failed to scaffold {kind} '{name}'"))?;
    print_report(&report);

    Ok(())
}
