//! Configuration management for avalonia-scaffold

mod settings;

pub use settings::{CONFIG_FILE_NAME, Config};
