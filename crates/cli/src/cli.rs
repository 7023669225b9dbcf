use anyhow::Result;
use avalonia_scaffold_core::ComponentKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{init_command, namespace_command, new_command};

#[derive(Parser, Debug)]
#[command(name = "avalonia-scaffold")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a component and fix its namespaces
    #[command(visible_alias = "n")]
    New {
        /// Component kind: window, user-control, templated-control, styles, resource
        kind: ComponentKind,

        /// Class name of the component (e.g. MainWindow)
        name: String,

        /// Folder to create the component in (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Folder the project search starts from (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Also create a view-model in the mirrored ViewModels folder
        #[arg(long)]
        view_model: bool,

        /// Print what would be generated without running the generator
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the namespaces a component in a folder would get
    #[command(visible_alias = "ns")]
    Namespace {
        /// Folder the component would live in
        dir: PathBuf,

        /// Class name of the component
        name: String,

        /// Folder the project search starts from (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a default .avalonia-scaffold.json
    Init {
        /// Folder to write the configuration to
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::New {
                kind,
                name,
                dir,
                root,
                view_model,
                dry_run,
            } => new_command(kind, &name, dir, root, view_model, dry_run),
            Commands::Namespace {
                dir,
                name,
                root,
                json,
            } => namespace_command(&dir, &name, root, json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
