//! # OctoPanel
//!
//! Touchscreen front end for OctoPrint-managed printers running Klipper.
//!
//! ## Architecture
//!
//! 1. **octopanel-core** - Error types, calibration model, panel logger
//! 2. **octopanel-communication** - OctoPrint REST client
//! 3. **octopanel-settings** - Configuration loading and validation
//! 4. **octopanel-ui** - GTK4 panels
//! 5. **octopanel** - Main binary that wires them together

pub use octopanel_communication::{OctoPrintClient, PrinterClient};
pub use octopanel_core::{CalibrationPhase, Error, Result, ZStep};
pub use octopanel_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Console output with pretty formatting, filtered by `RUST_LOG` on top of
/// an `info` default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Load settings from the default location. Any failure is logged and the
/// defaults are used so the panel still comes up.
pub fn load_config() -> Config {
    let path = match SettingsManager::config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("Cannot locate settings: {}", e);
            return Config::default();
        }
    };

    SettingsManager::load_or_default(&path).unwrap_or_else(|e| {
        tracing::error!("Failed to load settings from {}: {}", path.display(), e);
        Config::default()
    })
}
