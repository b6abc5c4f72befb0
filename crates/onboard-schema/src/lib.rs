//! Onboard Schema
//!
//! The wire and domain schema shared between the hearing sheet client and
//! the spreadsheet-append endpoint.
//!
//! # Core Concepts
//!
//! - [`FieldSpec`]: the committed, ordered list of hearing sheet fields
//!   with kind and required flags
//! - [`HearingSnapshot`]: the complete current value of all form fields,
//!   captured as one unit
//! - [`SubmissionRecord`]: fixed-order row projection of a snapshot
//! - [`DerivedLinks`]: document links carrying the payload as a base64
//!   URL fragment
//! - [`EndpointResponse`]: the in-band status/message contract
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard_schema::{HearingSnapshot, SubmissionRecord, DerivedLinks};
//!
//! let mut snapshot = HearingSnapshot::new();
//! snapshot.set_single("name", "Taro");
//! snapshot.validate()?;
//!
//! let links = DerivedLinks::derive("https://example.github.io/onboard", &snapshot)?;
//! let record = SubmissionRecord::project(&snapshot, receipt_timestamp(), &links);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod fields;
mod links;
mod record;
mod response;
mod snapshot;

// Re-exports
pub use fields::{FieldKind, FieldSpec, HEARING_FIELDS, REQUIRED_FIELDS};
pub use links::{DerivedLinks, LinkError};
pub use record::{receipt_timestamp, SubmissionRecord, COLUMN_COUNT, MULTI_VALUE_SEPARATOR};
pub use response::{EndpointResponse, EndpointStatus};
pub use snapshot::{FieldValue, HearingSnapshot, ValidationError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
