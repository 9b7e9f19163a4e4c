//! Submission facade for the CRPT document-creation endpoint.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::ClientConfig;
use crate::document::Document;
use crate::error::{CrptError, Result};
use crate::ratelimit::PermitGate;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Rate-limited client for the CRPT document-creation API.
///
/// Every submission first acquires a permit from the gate, so the configured
/// request limit holds across any number of concurrently submitting tasks.
pub struct CrptClient<T: HttpTransport = ReqwestTransport> {
    /// Client configuration
    config: ClientConfig,
    /// Admission gate for outbound calls
    gate: PermitGate,
    /// The transport used to reach the endpoint
    transport: Arc<T>,
}

impl CrptClient<ReqwestTransport> {
    /// Create a new client using the reqwest transport.
    ///
    /// Fails with [`CrptError::InvalidArgument`] if the configured request
    /// limit or window duration is zero.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> CrptClient<T> {
    /// Create a new client with a custom transport implementation.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let gate = PermitGate::new(
            config.rate_limit.window,
            config.rate_limit.duration,
            config.rate_limit.limit,
        )?;

        Ok(Self {
            config,
            gate,
            transport: Arc::new(transport),
        })
    }

    /// Submit a serialized document with its signature.
    ///
    /// Suspends until the rate limiter admits the call, then POSTs the
    /// payload to the configured endpoint. A non-200 answer or a transport
    /// failure is returned as an error; the client remains usable for
    /// subsequent submissions either way.
    pub async fn submit(&self, payload: &[u8], signature: &str) -> Result<()> {
        self.gate.acquire().await?;
        debug!("Acquired a permit, proceeding with the request");

        let request = HttpRequest {
            url: self.config.endpoint.clone(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (
                    self.config.signature_header.name().to_string(),
                    signature.to_string(),
                ),
            ],
            body: payload.to_vec(),
        };

        info!(endpoint = %self.config.endpoint, "Sending document to API");
        let response = self.transport.send(request).await.map_err(|e| {
            error!(error = %e, "Transport failure while sending document");
            e
        })?;

        if response.status == 200 {
            debug!("Response received successfully");
            Ok(())
        } else {
            warn!(status = response.status, "Response with unexpected status code");
            Err(CrptError::HttpStatus {
                status: response.status,
            })
        }
    }

    /// Encode a document as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CrptError::Serialization`] if the document cannot be
    /// encoded.
    pub fn create_json_document(&self, document: &Document) -> Result<String> {
        document.to_json()
    }

    /// Validate, serialize and submit a document in one call.
    pub async fn send_document(&self, document: &Document, signature: &str) -> Result<()> {
        document.validate()?;
        let json = document.to_json()?;
        self.submit(json.as_bytes(), signature).await
    }

    /// Shut the client down, cancelling the rate limiter's background task.
    ///
    /// Submissions waiting for a permit fail with
    /// [`CrptError::Interrupted`].
    pub fn shutdown(&self) {
        self.gate.shutdown();
    }
}
