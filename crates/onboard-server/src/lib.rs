//! Onboard Server
//!
//! The remote end of the hearing sheet tool: a small HTTP service that
//! validates a posted snapshot against the shared schema, projects it
//! into the fixed-order row, appends it to an append-only sheet and
//! derives the two document links. All failures are reported in-band
//! over HTTP 200; a read-only ping answers liveness checks.
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard_server::{routes, MemorySheet, ServerState};
//! use std::sync::Arc;
//!
//! let sheet = Arc::new(MemorySheet::new());
//! let state = ServerState::new("https://example.github.io/onboard", sheet);
//! warp::serve(routes(state)).run(([0, 0, 0, 0], 8787)).await;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod routes;
mod sheet;

// Re-exports
pub use routes::{routes, ServerState};
pub use sheet::{JsonlSheet, MemorySheet, RowSink, SheetError};
