//! # OctoPanel Communication
//!
//! Talks to the printer host. Supports the OctoPrint REST API over HTTP(S)
//! plus a recording client used for dry runs.

pub mod client;
pub mod octoprint;

pub use client::{ClientParams, PrinterClient, RecordingClient, UnavailableClient};
pub use octoprint::{
    CommandRequest, ConnectionState, OctoPrintClient, PrinterRequest,
    RunZOffsetCalibrationRequest,
};
