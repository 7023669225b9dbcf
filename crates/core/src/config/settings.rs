use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    interfaces::Logger,
    project::ProjectMarkers,
};

pub const CONFIG_FILE_NAME: &str = ".avalonia-scaffold.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    pub solution_suffix: String,
    pub project_suffix: String,

    // View-model companion settings
    pub base_class_file: String,
    pub views_folder: String,
    pub view_models_folder: String,
    pub view_model_suffix: String,

    // External template generator
    pub generator_command: String,
    pub generator_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solution_suffix: ".sln".to_string(),
            project_suffix: ".csproj".to_string(),
            base_class_file: "ViewModelBase.cs".to_string(),
            views_folder: "Views".to_string(),
            view_models_folder: "ViewModels".to_string(),
            view_model_suffix: "ViewModel".to_string(),
            generator_command: "dotnet".to_string(),
            generator_args: vec!["new".to_string()],
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// The nearest config file above `start_path`, or the defaults
    pub fn discover(start_path: &Path, logger: &dyn Logger) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                logger.debug(
                    "loading config",
                    &[("path", path.display().to_string().as_str())],
                );
                Self::load_from_file(&path)
            }
            None => {
                logger.debug("no config file, using defaults", &[]);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("solution_suffix", &self.solution_suffix),
            ("project_suffix", &self.project_suffix),
            ("base_class_file", &self.base_class_file),
            ("view_models_folder", &self.view_models_folder),
            ("generator_command", &self.generator_command),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::ConfigError(format!("'{field}' must not be empty")));
            }
        }
        if self.view_models_folder.contains(['/', '\\']) {
            return Err(Error::ConfigError(
                "'view_models_folder' must be a single folder name".to_string(),
            ));
        }
        Ok(())
    }

    pub fn markers(&self) -> ProjectMarkers {
        ProjectMarkers {
            solution_suffix: self.solution_suffix.clone(),
            project_suffix: self.project_suffix.clone(),
        }
    }
}
