//! Error handling for OctoPanel
//!
//! Provides error types for the layers of the application:
//! - Client errors (talking to the OctoPrint server)
//! - Generic I/O and ad-hoc failures
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Printer client error type
///
/// Represents failures while submitting a request to the printer host,
/// from transport problems to non-success HTTP statuses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request did not complete within the configured timeout
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The request could not be delivered
    #[error("Transport error: {reason}")]
    Transport {
        /// The reason the request failed.
        reason: String,
    },

    /// The server rejected the API key
    #[error("Unauthorized: check the OctoPrint API key")]
    Unauthorized,

    /// The printer is not connected or not ready to accept commands
    #[error("Printer is not operational")]
    PrinterNotOperational,

    /// The server answered with a status we do not handle
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body, if any.
        body: String,
    },

    /// The configured endpoint is not a usable URL
    #[error("Invalid endpoint: {endpoint}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
    },

    /// The response body could not be decoded
    #[error("Failed to decode response: {reason}")]
    Decode {
        /// The reason decoding failed.
        reason: String,
    },
}

/// Main error type for OctoPanel
///
/// Aggregates the error kinds produced by the workspace crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Printer client error
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Client(ClientError::Timeout { .. }))
    }

    /// Check if this is a client error
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Client(_))
    }
}

/// Result type alias for OctoPanel operations
pub type Result<T> = std::result::Result<T, Error>;
