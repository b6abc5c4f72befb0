//! In-band endpoint response contract
//!
//! The endpoint always answers HTTP 200; failures travel in the body as
//! `{status: "error", message}`. `ok` is reserved for the read-only
//! liveness ping.

use serde::{Deserialize, Serialize};

/// In-band status of an endpoint reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointStatus {
    /// Submission recorded
    Success,
    /// Submission rejected or failed remotely
    Error,
    /// Liveness ping
    Ok,
}

/// The status/message object returned by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointResponse {
    /// Outcome class
    pub status: EndpointStatus,
    /// Human-readable detail
    pub message: String,
}

impl EndpointResponse {
    /// Successful submission reply
    #[inline]
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: EndpointStatus::Success,
            message: message.into(),
        }
    }

    /// In-band error reply
    #[inline]
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EndpointStatus::Error,
            message: message.into(),
        }
    }

    /// Liveness reply
    #[inline]
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: EndpointStatus::Ok,
            message: message.into(),
        }
    }
}
