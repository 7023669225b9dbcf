//! avalonia-scaffold - namespace resolution and source rewriting for Avalonia components
//!
//! This crate provides functionality to:
//! - Locate the solution or project directory that anchors namespaces
//! - Derive dotted namespaces from the folder hierarchy
//! - Rewrite the namespace tokens in files produced by `dotnet new`
//! - Create companion view-models that inherit from a conventional base class
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod namespace;
pub mod orchestrator;
pub mod project;
pub mod rewrite;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

pub use config::Config;
pub use interfaces::{Logger, ScaffoldGenerator, TracingLogger};
pub use namespace::{NamespaceBuilder, NamespacePair};
pub use orchestrator::{ScaffoldOrchestrator, ScaffoldPlan, ScaffoldReport, ScaffoldRequest};
pub use project::{ProjectRoot, ProjectRootLocator};
pub use rewrite::{BaseClassInheritanceInjector, InjectionOutcome, replace_region};
pub use services::DotnetGenerator;
