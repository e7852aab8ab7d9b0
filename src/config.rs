use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dispatch::UnknownCodePolicy;
use crate::error::WorkoutRsError;
use crate::export::{Language, OutputFormat};
use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How sensor packages are turned into workouts
    pub dispatch: DispatchSettings,

    /// How reports are rendered
    pub output: OutputSettings,

    /// Diagnostics
    pub logging: LogConfig,
}

/// Dispatcher settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Behaviour for workout codes outside RUN/WLK/SWM
    pub unknown_code_policy: UnknownCodePolicy,

    /// Stop a batch at the first failing package
    pub fail_fast: bool,
}

/// Report settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub language: Language,
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = self.to_toml()?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration to TOML")
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("workoutrs")
            .join("config.toml")
    }

    /// Load the given file, or the default path when it exists.
    ///
    /// A missing default file yields the defaults; a missing explicit file or
    /// one that does not parse is a configuration error.
    pub fn load_or_default(path: Option<&Path>) -> crate::error::Result<Self> {
        let loaded = match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    Self::load_from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        };

        loaded.map_err(|e| WorkoutRsError::Configuration(format!("{:#}", e)))
    }

    /// Write a default configuration file, refusing to replace an existing
    /// one unless `force` is set
    pub fn write_default(path: &Path, force: bool) -> crate::error::Result<()> {
        if path.exists() && !force {
            return Err(WorkoutRsError::Configuration(format!(
                "{} already exists, use --force to overwrite",
                path.display()
            )));
        }

        Self::default()
            .save_to_file(path)
            .map_err(|e| WorkoutRsError::Configuration(format!("{:#}", e)))
    }
}
