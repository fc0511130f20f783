//! Client error taxonomy and its mapping onto facade HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use xero_core::DecodeError;

/// Errors from fetching a report from the Xero API.
///
/// All kinds are terminal; there are no internal retries. Callers match on
/// variants, never on message text.
#[derive(Debug, Error)]
pub enum XeroError {
    /// The request never completed at the transport level.
    #[error("error while retrieving Balance Sheet from Xero: {0}")]
    RequestFailure(#[from] reqwest::Error),

    /// Returned for a 400 status code.
    #[error("invalid parameter")]
    InvalidRequest,

    /// See <https://developer.xero.com/documentation/guides/oauth2/limits/#api-rate-limits>
    #[error("request hit the rate limit")]
    TooManyRequests,

    /// Returned for any 5xx status code.
    #[error("Xero API is not reachable")]
    XeroDown,

    /// Any status outside the mapped set.
    #[error("invalid status in Xero response: {0}")]
    UnexpectedStatus(u16),

    /// The response body failed one of the two decode phases.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl IntoResponse for XeroError {
    /// Rewrite the taxonomy into facade responses. Kinds without a
    /// dedicated mapping surface as 500 with the error text as plain-text
    /// body.
    fn into_response(self) -> Response {
        match self {
            XeroError::InvalidRequest => {
                (StatusCode::BAD_REQUEST, "invalid parameter").into_response()
            }
            XeroError::TooManyRequests => {
                (StatusCode::TOO_MANY_REQUESTS, "enhance your calm!").into_response()
            }
            XeroError::XeroDown => (
                StatusCode::GATEWAY_TIMEOUT,
                "Xero API not available at the moment",
            )
                .into_response(),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_carries_literal_code() {
        let err = XeroError::UnexpectedStatus(404);

        assert_eq!(err.to_string(), "invalid status in Xero response: 404");
    }

    #[test]
    fn decode_errors_pass_through_unwrapped() {
        let err = XeroError::from(DecodeError::BrokenResponse);

        assert_eq!(err.to_string(), "Xero response with error status");
    }
}
