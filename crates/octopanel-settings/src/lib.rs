//! OctoPanel Settings Crate
//!
//! Handles application configuration: printer connection, UI preferences,
//! G-code overrides and calibration defaults.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{CalibrationSettings, Config, GcodeSettings, PrinterSettings, Theme, UiSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
