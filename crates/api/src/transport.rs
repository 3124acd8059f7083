//! HTTP transport seam
//!
//! The API client never talks to `reqwest` directly. It builds an
//! [`ApiRequest`] and hands it to an [`HttpTransport`], which returns the
//! status code and raw body text. Interpreting the body is left to the
//! client, since every endpoint treats empty and malformed bodies
//! differently.

use async_trait::async_trait;
use pedidos_core::{AdminError, AdminResult};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

// ============================================================================
// Request / Response
// ============================================================================

/// HTTP method used by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A received response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body holds anything but whitespace
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// Sends requests and returns raw responses
///
/// Implementations report a failure only when no response was received;
/// non-2xx statuses are returned as ordinary responses.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// [`HttpTransport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with an optional per-request timeout
    pub fn new(timeout: Option<Duration>) -> AdminResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdminError::config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(describe_transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(describe_transport_error)?;

        tracing::debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );

        Ok(ApiResponse { status, body })
    }
}

fn describe_transport_error(err: reqwest::Error) -> AdminError {
    if err.is_timeout() {
        AdminError::network(format!("request timed out: {err}"))
    } else if err.is_connect() {
        AdminError::network(format!("unable to connect: {err}"))
    } else {
        AdminError::network(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_classification() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(404, "{}").is_success());
        assert!(!ApiResponse::new(200, "  \n").has_body());
        assert!(ApiResponse::new(200, "[]").has_body());
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::new(HttpMethod::Patch, "http://api/api/products/1/stock")
            .with_body(json!({"stock": 4}));
        assert_eq!(request.method.to_string(), "PATCH");
        assert_eq!(request.body, Some(json!({"stock": 4})));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let transport = ReqwestTransport::new(Some(Duration::from_secs(2))).unwrap();
        let request = ApiRequest::new(HttpMethod::Get, "http://127.0.0.1:9/api/products");
        let err = transport.send(&request).await.unwrap_err();
        assert!(err.is_network());
    }
}
