//! HTTP transport abstraction for outbound requests.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::trace;

use crate::error::{CrptError, Result};

/// An outbound POST request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Target URL
    pub url: String,
    /// Header name-value pairs
    pub headers: Vec<(String, String)>,
    /// Request body bytes
    pub body: Vec<u8>,
}

/// The response half of a completed exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

/// Trait for HTTP transport implementations.
///
/// This trait abstracts the network layer so the client can run against the
/// real `ReqwestTransport` in production and a mock in tests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a POST request and return the response.
    ///
    /// # Errors
    ///
    /// Returns [`CrptError::Transport`] on connection or I/O failure. A
    /// non-200 status is not an error at this layer; interpretation belongs
    /// to the caller.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Reqwest-backed transport.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CrptError::Transport(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| CrptError::Transport(e.to_string()))?;
            headers.insert(name, value);
        }

        trace!(url = %request.url, "Sending POST request");
        let response = self
            .client
            .post(&request.url)
            .headers(headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
