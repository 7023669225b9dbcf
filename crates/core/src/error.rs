use std::io;
use std::path::PathBuf;

/// Errors that can occur while scaffolding a component
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No project found: no solution or project file under {}", .start.display())]
    RootNotFound { start: PathBuf },

    #[error("Namespace error: {0}")]
    NamespaceNotConstructible(String),

    #[error("Invalid component name '{0}': expected a C# identifier")]
    InvalidName(String),

    #[error("Marker not found: '{marker}' is missing from the generated text")]
    MarkerNotFound { marker: String },

    #[error("Declaration not found: no 'class {class_name}' followed by '{{'")]
    DeclarationNotFound { class_name: String },

    #[error("Template generator failed for '{template}': {message}")]
    GeneratorFailed { template: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for scaffold operations
pub type Result<T> = std::result::Result<T, Error>;
