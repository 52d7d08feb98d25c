//! # OctoPanel Core
//!
//! Core types and utilities shared by the OctoPanel crates: the error
//! taxonomy, the calibration model and the panel logging collaborator.

pub mod calibration;
pub mod data;
pub mod error;
pub mod logging;
pub mod types;

pub use calibration::{CalibrationPhase, Direction, ProbeTracker, Step, StepCycle, ZStep};
pub use data::PointCoordinates;
pub use error::{ClientError, Error, Result};
pub use logging::{LogEntry, LogLevel, MemoryLogger, PanelLogger, TracingLogger};
pub use types::{shared, Shared};
