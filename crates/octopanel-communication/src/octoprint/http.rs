//! Blocking HTTP implementation of [`PrinterClient`] for OctoPrint.

use super::requests::{ConnectionResponse, ConnectionState, PrinterRequest, URI_CONNECTION};
use crate::client::{ClientParams, PrinterClient};
use octopanel_core::{ClientError, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, Url};
use std::time::Duration;

const API_KEY_HEADER: &str = "X-Api-Key";

pub struct OctoPrintClient {
    http: Client,
    base: Url,
    api_key: String,
    timeout_ms: u64,
}

impl OctoPrintClient {
    pub fn new(params: &ClientParams) -> Result<Self> {
        let base = parse_endpoint(&params.endpoint)?;
        let timeout = Duration::from_millis(params.timeout_ms.max(1));
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            base,
            api_key: params.api_key.clone(),
            timeout_ms: params.timeout_ms,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.base.as_str()
    }

    fn request(&self, method: Method, uri: &str) -> Result<RequestBuilder> {
        let url = self
            .base
            .join(uri.trim_start_matches('/'))
            .map_err(|_| ClientError::InvalidEndpoint {
                endpoint: format!("{}{}", self.base, uri),
            })?;
        let mut req = self.http.request(method, url);
        if !self.api_key.is_empty() {
            req = req.header(API_KEY_HEADER, &self.api_key);
        }
        Ok(req)
    }

    fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send().map_err(|e| self.transport_error(e))?;
        let status = resp.status().as_u16();
        if resp.status().is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        Err(status_error(status, body).into())
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            ClientError::Transport {
                reason: e.to_string(),
            }
        }
    }
}

impl PrinterClient for OctoPrintClient {
    fn submit(&self, request: &PrinterRequest) -> Result<()> {
        tracing::debug!("POST {} {}", request.uri(), request);
        let req = self.request(Method::POST, request.uri())?.json(&request.body());
        self.send(req)?;
        Ok(())
    }

    fn connection_state(&self) -> Result<ConnectionState> {
        let resp = self.send(self.request(Method::GET, URI_CONNECTION)?)?;
        let parsed: ConnectionResponse = resp.json().map_err(|e| ClientError::Decode {
            reason: e.to_string(),
        })?;
        Ok(parsed.current)
    }
}

/// Validate an endpoint and normalise it so relative API paths join onto it.
pub fn parse_endpoint(endpoint: &str) -> std::result::Result<Url, ClientError> {
    let invalid = || ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
    };
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let mut url = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Map a non-success HTTP status to a client error.
pub fn status_error(status: u16, body: String) -> ClientError {
    match status {
        401 | 403 => ClientError::Unauthorized,
        409 => ClientError::PrinterNotOperational,
        _ => ClientError::UnexpectedStatus { status, body },
    }
}
