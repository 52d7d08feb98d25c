//! Request payloads understood by the OctoPrint REST API.

use crate::client::PrinterClient;
use octopanel_core::Result;
use serde::{Deserialize, Serialize};

/// Path of the arbitrary-command endpoint.
pub const URI_COMMAND: &str = "/api/printer/command";
/// Path of the Z-Bolt plugin endpoint that runs the built-in probe calibration.
pub const URI_ZBOLT: &str = "/api/plugin/zbolt";
/// Path of the connection status endpoint.
pub const URI_CONNECTION: &str = "/api/connection";

/// Sends one or more raw G-code lines to the printer, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommandRequest {
    pub commands: Vec<String>,
}

impl CommandRequest {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// A request carrying a single command.
    pub fn single(command: impl Into<String>) -> Self {
        Self {
            commands: vec![command.into()],
        }
    }

    pub fn submit(self, client: &dyn PrinterClient) -> Result<()> {
        client.submit(&PrinterRequest::Command(self))
    }
}

/// Asks the printer host to run its own Z-offset probe calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunZOffsetCalibrationRequest;

impl RunZOffsetCalibrationRequest {
    pub fn submit(self, client: &dyn PrinterClient) -> Result<()> {
        client.submit(&PrinterRequest::RunZOffsetCalibration(self))
    }
}

/// Every write request the panel can submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterRequest {
    Command(CommandRequest),
    RunZOffsetCalibration(RunZOffsetCalibrationRequest),
}

impl PrinterRequest {
    /// API path the request is posted to.
    pub fn uri(&self) -> &'static str {
        match self {
            Self::Command(_) => URI_COMMAND,
            Self::RunZOffsetCalibration(_) => URI_ZBOLT,
        }
    }

    /// JSON body of the request.
    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::Command(cmd) => serde_json::json!({ "commands": cmd.commands }),
            Self::RunZOffsetCalibration(_) => {
                serde_json::json!({ "command": "run_zoffset_calibration" })
            }
        }
    }

    /// G-code lines carried by the request, empty for plugin commands.
    pub fn commands(&self) -> &[String] {
        match self {
            Self::Command(cmd) => &cmd.commands,
            Self::RunZOffsetCalibration(_) => &[],
        }
    }
}

impl std::fmt::Display for PrinterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(cmd) => write!(f, "command [{}]", cmd.commands.join("; ")),
            Self::RunZOffsetCalibration(_) => write!(f, "run Z-offset calibration"),
        }
    }
}

/// Printer connection as reported by `GET /api/connection`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionState {
    pub state: String,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub baudrate: Option<u32>,
    #[serde(default, rename = "printerProfile")]
    pub printer_profile: Option<String>,
}

impl ConnectionState {
    /// Whether the printer is attached and reachable through the server.
    pub fn is_connected(&self) -> bool {
        !(self.state.starts_with("Closed")
            || self.state.starts_with("Offline")
            || self.state.starts_with("Error"))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConnectionResponse {
    pub current: ConnectionState,
}
