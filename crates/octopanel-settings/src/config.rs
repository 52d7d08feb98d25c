//! Configuration and settings management for OctoPanel
//!
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Printer connection (endpoint, API key, timeout)
//! - UI preferences (window size, theme)
//! - G-code overrides (custom probe calibration command)
//! - Calibration defaults (probe point, jog step presets)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use octopanel_communication::octoprint::http::parse_endpoint;
use octopanel_communication::ClientParams;
use octopanel_core::{PointCoordinates, Step};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Printer host connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Base URL of the OctoPrint server
    pub endpoint: String,
    /// OctoPrint API key
    pub api_key: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Log requests instead of sending them
    pub dry_run: bool,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000".to_string(),
            api_key: String::new(),
            timeout_ms: 5000,
            dry_run: false,
        }
    }
}

impl PrinterSettings {
    pub fn client_params(&self) -> ClientParams {
        ClientParams {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow system preference
    #[default]
    System,
    /// Force light theme
    Light,
    /// Force dark theme
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
    /// Start fullscreen (touchscreen kiosk mode)
    pub fullscreen: bool,
    /// Selected theme
    pub theme: Theme,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 480,
            fullscreen: false,
            theme: Theme::default(),
        }
    }
}

/// G-code overrides for printer-specific routines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GcodeSettings {
    /// Command that starts probe calibration. Empty selects the host's
    /// built-in Z-offset calibration.
    pub probe_calibrate: String,
}

impl GcodeSettings {
    /// The custom probe calibration command, if one is configured.
    pub fn probe_calibrate(&self) -> Option<&str> {
        let cmd = self.probe_calibrate.trim();
        (!cmd.is_empty()).then_some(cmd)
    }
}

/// Calibration panel defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationSettings {
    /// Point the nozzle is calibrated over
    pub probe_point: PointCoordinates,
    /// Step sizes offered by the jog step selector
    pub steps: Vec<Step>,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            probe_point: PointCoordinates::default(),
            steps: Step::z_calibration_presets(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub printer: PrinterSettings,
    pub ui: UiSettings,
    pub gcodes: GcodeSettings,
    pub calibration: CalibrationSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.printer.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingKey("printer.endpoint".to_string()));
        }
        if let Err(e) = parse_endpoint(&self.printer.endpoint) {
            return Err(ConfigError::InvalidValue {
                key: "printer.endpoint".to_string(),
                reason: e.to_string(),
            });
        }
        if self.printer.timeout_ms == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "printer.timeout_ms".to_string(),
                value: self.printer.timeout_ms.to_string(),
            });
        }

        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "ui.window_size".to_string(),
                value: format!("{}x{}", self.ui.window_width, self.ui.window_height),
            });
        }

        if self.calibration.steps.is_empty() {
            return Err(ConfigError::MissingKey("calibration.steps".to_string()));
        }
        if let Some(step) = self
            .calibration
            .steps
            .iter()
            .find(|s| !(s.value.is_finite() && s.value > 0.0))
        {
            return Err(ConfigError::ValueOutOfRange {
                key: format!("calibration.steps[{}]", step.label),
                value: step.value.to_string(),
            });
        }

        Ok(())
    }

    /// Apply `OCTOPRINT_HOST` / `OCTOPRINT_APIKEY` style overrides.
    ///
    /// `lookup` is usually `std::env::var`; it is a parameter so overrides can
    /// be applied from any source.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("OCTOPRINT_HOST").filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Printer endpoint overridden by OCTOPRINT_HOST");
            self.printer.endpoint = host;
        }
        if let Some(key) = lookup("OCTOPRINT_APIKEY").filter(|v| !v.trim().is_empty()) {
            tracing::debug!("API key overridden by OCTOPRINT_APIKEY");
            self.printer.api_key = key;
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
