//! Submission sink
//!
//! `submit` reads the snapshot it is given (read-before-send: edits made
//! while a submission is in flight are not reflected), validates the
//! preconditions locally, and issues exactly one POST.

use crate::config::SinkConfig;
use crate::transport::{Delivery, HttpTransport, Transport, TransportError};
use onboard_schema::{EndpointResponse, HearingSnapshot, ValidationError};
use tracing::{debug, error};

/// Local failure raised before any network I/O
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// A required field is missing or blank
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No destination endpoint is configured
    #[error("no submission endpoint configured")]
    NotConfigured,

    /// The snapshot could not be serialized
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Observable outcome of a submission attempt
///
/// `Unknown` means the payload left this host over an opaque delivery;
/// whether the endpoint recorded it cannot be observed. Callers decide
/// how to surface that; it is not `Delivered`.
#[derive(Debug)]
pub enum SubmissionResult {
    /// The endpoint's in-band reply was read back
    Delivered(EndpointResponse),
    /// The transport itself failed; nothing is known to have arrived
    NetworkError(TransportError),
    /// Sent, outcome not observable (accepted blind spot)
    Unknown,
}

impl SubmissionResult {
    /// Whether the endpoint positively confirmed the submission
    #[inline]
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// One-way submission sink over an injected transport
#[derive(Debug)]
pub struct SubmissionSink<T: Transport = HttpTransport> {
    config: SinkConfig,
    transport: T,
}

impl SubmissionSink<HttpTransport> {
    /// Sink over the response-reading HTTP transport
    #[must_use]
    pub fn new(config: SinkConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }

    /// Sink over the opaque HTTP transport (historical behavior)
    #[must_use]
    pub fn fire_and_forget(config: SinkConfig) -> Self {
        Self::with_transport(config, HttpTransport::opaque())
    }
}

impl<T: Transport> SubmissionSink<T> {
    /// Sink over a custom transport
    #[inline]
    #[must_use]
    pub fn with_transport(config: SinkConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Injected configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// Submit a snapshot to the configured endpoint
    ///
    /// Preconditions are checked before any I/O: required fields must be
    /// non-blank and an endpoint must be configured; either failure
    /// aborts locally with no partial side effects. On the wire this is
    /// a single POST with no retry and no idempotency key, so repeating the
    /// call produces a duplicate remote record.
    ///
    /// # Errors
    /// Returns [`SinkError`] for local precondition failures only.
    /// Transport-level failures are part of the result as
    /// [`SubmissionResult::NetworkError`].
    pub async fn submit(
        &self,
        snapshot: &HearingSnapshot,
    ) -> Result<SubmissionResult, SinkError> {
        snapshot.validate()?;
        let endpoint = self.config.endpoint().ok_or(SinkError::NotConfigured)?;
        let body = serde_json::to_string(snapshot)?;

        debug!(endpoint, bytes = body.len(), "submitting hearing sheet");
        match self.transport.post(endpoint, body).await {
            Ok(Delivery::Acknowledged(reply)) => Ok(SubmissionResult::Delivered(reply)),
            Ok(Delivery::Opaque) => Ok(SubmissionResult::Unknown),
            Err(err) => {
                error!(endpoint, %err, "submission transport failed");
                Ok(SubmissionResult::NetworkError(err))
            }
        }
    }
}
