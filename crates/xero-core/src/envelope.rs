//! Response envelope gate for the Reports endpoints.
//!
//! Xero can answer HTTP 200 with a logical failure embedded in the body, so
//! decoding happens in two phases over the same raw buffer: a minimal
//! envelope probe for the status discriminator, then the full typed
//! document. The envelope never leaves the client boundary.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::types::ReportResponse;

/// Status discriminator common to all Xero API responses.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Xero capitalises this field on the wire; both spellings are accepted.
    #[serde(default, alias = "Status")]
    pub status: String,
}

impl Envelope {
    /// Whether the response was correctly returned by the Xero API.
    ///
    /// The comparison is case-sensitive; an absent discriminator decodes to
    /// an empty string and fails the check.
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// First decode phase: probe the status discriminator.
pub fn decode_envelope(body: &[u8]) -> Result<Envelope, DecodeError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(DecodeError::InvalidResponse)?;

    if !envelope.is_ok() {
        return Err(DecodeError::BrokenResponse);
    }

    Ok(envelope)
}

/// Second decode phase: the full typed document, over the same buffer the
/// envelope probe already accepted.
///
/// Nesting depth of Section rows is bounded by serde_json's recursion limit.
pub fn decode_reports(body: &[u8]) -> Result<ReportResponse, DecodeError> {
    serde_json::from_slice(body).map_err(DecodeError::InvalidJson)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_status_spellings() {
        assert!(decode_envelope(br#"{"Status":"OK"}"#).is_ok());
        assert!(decode_envelope(br#"{"status":"OK"}"#).is_ok());
    }

    #[test]
    fn status_check_is_case_sensitive() {
        let err = decode_envelope(br#"{"Status":"ok"}"#).unwrap_err();

        assert!(matches!(err, DecodeError::BrokenResponse));
    }

    #[test]
    fn missing_status_is_broken() {
        let err = decode_envelope(br"{}").unwrap_err();

        assert!(matches!(err, DecodeError::BrokenResponse));
    }

    #[test]
    fn non_json_body_is_invalid() {
        let err = decode_envelope(b"hello").unwrap_err();

        assert!(matches!(err, DecodeError::InvalidResponse(_)));
    }
}
