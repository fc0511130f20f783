//! Decode error taxonomy for Xero response bodies.

use thiserror::Error;

/// Errors from decoding a Reports response body.
///
/// Callers distinguish kinds by matching on variants, never by inspecting
/// message text.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was not decodable as JSON at all.
    #[error("could not decode Xero response: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// The body decoded, but Xero reported a logical failure inside a 200.
    #[error("Xero response with error status")]
    BrokenResponse,

    /// The envelope was fine but the typed document failed to decode.
    #[error("could not decode Xero reports: {0}")]
    InvalidJson(#[source] serde_json::Error),
}
