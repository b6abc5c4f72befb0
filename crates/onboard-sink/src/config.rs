//! Sink configuration
//!
//! The endpoint URL is injected at construction rather than read from a
//! global, so tests can substitute it. A missing endpoint is a detected
//! configuration error surfaced before any I/O, never a silent failure.

/// Submission sink configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkConfig {
    /// Destination append endpoint, if configured
    pub endpoint: Option<String>,
}

impl SinkConfig {
    /// Create an unconfigured sink config
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a destination endpoint
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Configured endpoint, treating blank as absent
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconfigured() {
        assert_eq!(SinkConfig::new().endpoint(), None);
    }

    #[test]
    fn blank_endpoint_counts_as_absent() {
        let config = SinkConfig::new().with_endpoint("   ");
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn endpoint_round_trips() {
        let config = SinkConfig::new().with_endpoint("https://sheets.example/append");
        assert_eq!(config.endpoint(), Some("https://sheets.example/append"));
    }
}
