//! Onboard Sink
//!
//! One-way delivery of the current hearing sheet snapshot to the
//! configured append endpoint: validate locally, POST once, report the
//! outcome. No retry, no backoff, no idempotency key.
//!
//! # Core Concepts
//!
//! - [`SinkConfig`]: injected endpoint configuration
//! - [`Transport`]: the wire seam; [`HttpTransport`] reads the in-band
//!   response, its opaque mode reproduces the historical
//!   fire-and-forget delivery that discards response visibility
//! - [`SubmissionSink::submit`]: the single operation
//! - [`SubmissionResult`]: `Delivered` / `NetworkError` / `Unknown`;
//!   callers decide how to surface `Unknown`, it is never conflated
//!   with `Delivered`
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard_sink::{HttpTransport, SinkConfig, SubmissionResult, SubmissionSink};
//!
//! let config = SinkConfig::new().with_endpoint("https://sheets.example/append");
//! let sink = SubmissionSink::new(config);
//! match sink.submit(&snapshot).await? {
//!     SubmissionResult::Delivered(reply) => println!("{}", reply.message),
//!     SubmissionResult::Unknown => println!("sent, outcome not observable"),
//!     SubmissionResult::NetworkError(err) => eprintln!("submission failed: {err}"),
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod sink;
mod transport;

// Re-exports
pub use config::SinkConfig;
pub use sink::{SinkError, SubmissionResult, SubmissionSink};
pub use transport::{Delivery, HttpTransport, Transport, TransportError};
