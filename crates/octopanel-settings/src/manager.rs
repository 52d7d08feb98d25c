//! Locating, creating and loading the configuration file.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "octopanel";
const CONFIG_FILE: &str = "config.json";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "OCTOPANEL_CONFIG";

pub struct SettingsManager;

impl SettingsManager {
    /// Platform config directory for the application.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR))
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))
    }

    /// Default config file path, honouring `OCTOPANEL_CONFIG`.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load the config at `path`, falling back to defaults when the file is
    /// missing. Environment overrides are applied in both cases.
    pub fn load_or_default(path: &Path) -> SettingsResult<Config> {
        let mut config = if path.exists() {
            tracing::info!("Loading settings from {}", path.display());
            Config::load_from_file(path)?
        } else {
            tracing::info!("No settings at {}, using defaults", path.display());
            Config::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }
}
