//! # xero-core
//!
//! Wire types and decoding for Xero accounting reports.
//!
//! This crate provides:
//! - The typed document tree for Balance Sheet report responses
//! - The two-phase response decoder (envelope probe, then typed document)
//! - The codec for Xero's .NET JSON date format
//!
//! ## Example
//!
//! ```rust,ignore
//! use xero_core::{decode_envelope, decode_reports};
//!
//! // Gate on the embedded status discriminator first
//! decode_envelope(&body)?;
//!
//! // Then commit to the full typed decode over the same buffer
//! let reports = decode_reports(&body)?;
//! ```

pub mod datetime;
pub mod envelope;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use datetime::{DateError, DateTimeField};
pub use envelope::{decode_envelope, decode_reports, Envelope};
pub use error::DecodeError;
pub use types::{Attribute, Cell, Report, ReportResponse, Row};
