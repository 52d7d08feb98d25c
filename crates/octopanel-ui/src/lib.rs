//! # OctoPanel UI
//!
//! GTK4 touchscreen panels for OctoPanel. Panel behaviour lives in display-free
//! controllers under [`ui`]; the GTK views in [`ui::gtk`] only wire buttons to
//! them.

pub mod gtk_app;
pub mod ui;

pub use octopanel_settings::{Config, SettingsManager};
