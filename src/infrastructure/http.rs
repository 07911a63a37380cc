// src/infrastructure/http.rs
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::instrument;

use crate::application::{ApiRequest, Method, RawResponse, Transport};
use crate::domain::DomainError;

/// Blocking reqwest transport.
///
/// Requests never time out and are never retried.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| DomainError::RequestFailed(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Transport for ReqwestTransport {
    #[instrument(level = "debug", skip(self, request), fields(method = %request.method, url = %request.url))]
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, DomainError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            DomainError::RequestFailed(format!(
                "Failed {} {}: {}",
                request.method, request.url, e
            ))
        })?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            DomainError::RequestFailed(format!(
                "Failed to read response from {} {}: {}",
                request.method, request.url, e
            ))
        })?;

        Ok(RawResponse { status, body })
    }
}
