//! Printer client abstraction
//!
//! Panels only see [`PrinterClient`]; the HTTP implementation lives in
//! [`crate::octoprint`]. [`RecordingClient`] stands in when no server should
//! be contacted; [`UnavailableClient`] when none could be reached.

use crate::octoprint::requests::{ConnectionState, PrinterRequest};
use octopanel_core::{ClientError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Connection parameters for a printer host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientParams {
    /// Base URL of the OctoPrint server, e.g. `http://octopi.local`
    pub endpoint: String,
    /// Value sent in the `X-Api-Key` header
    pub api_key: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000".to_string(),
            api_key: String::new(),
            timeout_ms: 5000,
        }
    }
}

/// Synchronous handle to a printer host.
///
/// Calls block until the server answers or the timeout elapses; they are made
/// from the GTK main thread.
pub trait PrinterClient {
    /// Submit a write request. `Ok` means the server accepted it.
    fn submit(&self, request: &PrinterRequest) -> Result<()>;

    /// Query the printer connection state.
    fn connection_state(&self) -> Result<ConnectionState>;
}

/// Records every request instead of sending it.
///
/// Failures can be queued with [`RecordingClient::fail_next`]; each queued
/// error is returned by exactly one subsequent `submit`.
#[derive(Debug, Default)]
pub struct RecordingClient {
    submitted: RefCell<Vec<PrinterRequest>>,
    failures: RefCell<VecDeque<ClientError>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `submit` fail with `error`.
    pub fn fail_next(&self, error: ClientError) {
        self.failures.borrow_mut().push_back(error);
    }

    /// Requests submitted so far, including failed ones.
    pub fn submitted(&self) -> Vec<PrinterRequest> {
        self.submitted.borrow().clone()
    }

    /// All G-code lines submitted so far, flattened in order.
    pub fn commands(&self) -> Vec<String> {
        self.submitted
            .borrow()
            .iter()
            .flat_map(|r| r.commands().iter().cloned())
            .collect()
    }

    pub fn clear(&self) {
        self.submitted.borrow_mut().clear();
    }
}

impl PrinterClient for RecordingClient {
    fn submit(&self, request: &PrinterRequest) -> Result<()> {
        tracing::debug!("Recorded {}", request);
        self.submitted.borrow_mut().push(request.clone());
        match self.failures.borrow_mut().pop_front() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn connection_state(&self) -> Result<ConnectionState> {
        Ok(ConnectionState {
            state: "Operational".to_string(),
            port: None,
            baudrate: None,
            printer_profile: None,
        })
    }
}

/// Stands in for a client that could not be created. Every call fails with
/// the reason, so each button press is reported instead of silently dropped.
#[derive(Debug, Clone)]
pub struct UnavailableClient {
    reason: String,
}

impl UnavailableClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> ClientError {
        ClientError::Transport {
            reason: self.reason.clone(),
        }
    }
}

impl PrinterClient for UnavailableClient {
    fn submit(&self, request: &PrinterRequest) -> Result<()> {
        tracing::debug!("Dropped {}: {}", request, self.reason);
        Err(self.error().into())
    }

    fn connection_state(&self) -> Result<ConnectionState> {
        Err(self.error().into())
    }
}
