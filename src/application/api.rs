// src/application/api.rs
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// One outgoing request, already resolved against the base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub path: String,
    pub body: Option<Value>,
}

/// Status and body text of a response, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn has_content(&self) -> bool {
        self.status != 204 && !self.body.trim().is_empty()
    }
}

/// Moves a request over the wire.
///
/// Implementations return `Ok` for every response the server produced,
/// including error statuses; only failures to get a response at all are
/// `Err`.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, DomainError>;
}

/// JSON-over-HTTP wrapper around a [`Transport`].
///
/// One attempt per call. Non-2xx statuses become
/// [`DomainError::RequestFailed`] carrying the server's body text.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and return the decoded body, or `None` when the
    /// server answered without content.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, DomainError> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            path: path.to_string(),
            body,
        };
        debug!(%method, url = %request.url, "Sending request");

        let response = self.transport.send(&request)?;
        debug!(%method, path, status = response.status, "Received response");

        if !response.is_success() {
            warn!(%method, path, status = response.status, "Request rejected by server");
            let message = if response.body.trim().is_empty() {
                format!("Request failed: {} {} ({})", method, path, response.status)
            } else {
                response.body
            };
            return Err(DomainError::RequestFailed(message));
        }

        if !response.has_content() {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| {
                DomainError::RequestFailed(format!(
                    "Invalid JSON in response to {} {}: {}",
                    method, path, e
                ))
            })
    }

    /// Serialize `body` and send it
    pub fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, DomainError> {
        let body = serde_json::to_value(body).map_err(|e| {
            DomainError::RequestFailed(format!("Failed to encode request body: {}", e))
        })?;
        self.request(method, path, Some(body))
    }

    /// GET `path` and decode it as `R`; an empty response is an error here
    pub fn fetch<R: DeserializeOwned>(&self, path: &str) -> Result<R, DomainError> {
        let value = self.request(Method::Get, path, None)?.ok_or_else(|| {
            DomainError::RequestFailed(format!("Empty response from GET {}", path))
        })?;
        decode(Method::Get, path, value)
    }
}

/// Decode an already-parsed response body into a typed value
pub fn decode<R: DeserializeOwned>(
    method: Method,
    path: &str,
    value: Value,
) -> Result<R, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        DomainError::RequestFailed(format!(
            "Unexpected response to {} {}: {}",
            method, path, e
        ))
    })
}
