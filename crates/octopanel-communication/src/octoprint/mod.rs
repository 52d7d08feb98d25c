//! OctoPrint REST API: request payloads and the HTTP client.

pub mod http;
pub mod requests;

pub use http::OctoPrintClient;
pub use requests::{
    CommandRequest, ConnectionState, PrinterRequest, RunZOffsetCalibrationRequest,
};
