//! Wire transport seam
//!
//! [`Transport`] isolates the single POST so tests can record and stub
//! it. [`HttpTransport`] is the production implementation; its opaque
//! mode reproduces the historical delivery path that suppresses
//! response visibility, in which case the caller learns nothing beyond
//! "the transport did not throw".

use async_trait::async_trait;
use onboard_schema::EndpointResponse;

/// Transport-level failure (network unreachable, DNS, malformed reply)
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never completed
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The reply body was readable but not the expected contract
    #[error("unreadable endpoint reply: {0}")]
    Reply(#[from] serde_json::Error),
}

/// What the transport could observe about a delivery
#[derive(Debug)]
pub enum Delivery {
    /// The in-band endpoint reply was read back
    Acknowledged(EndpointResponse),
    /// The payload left this host but the reply is not observable
    Opaque,
}

/// One-shot POST of a serialized snapshot
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url`
    ///
    /// # Errors
    /// Returns [`TransportError`] only for transport-level failures;
    /// remote-side rejections travel in-band inside
    /// [`Delivery::Acknowledged`].
    async fn post(&self, url: &str, body: String) -> Result<Delivery, TransportError>;
}

/// Production transport over reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    opaque: bool,
}

impl HttpTransport {
    /// Transport that reads the in-band endpoint reply
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            opaque: false,
        }
    }

    /// Transport that discards response visibility
    ///
    /// Matches the original browser delivery (`no-cors`): a completed
    /// request yields [`Delivery::Opaque`] regardless of what the
    /// endpoint answered.
    #[must_use]
    pub fn opaque() -> Self {
        Self {
            client: reqwest::Client::new(),
            opaque: true,
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<Delivery, TransportError> {
        // text/plain on a JSON body is deliberate: a "simple" request
        // needs no CORS preflight round trip.
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        if self.opaque {
            return Ok(Delivery::Opaque);
        }

        let text = response.text().await?;
        let reply: EndpointResponse = serde_json::from_str(&text)?;
        Ok(Delivery::Acknowledged(reply))
    }
}
