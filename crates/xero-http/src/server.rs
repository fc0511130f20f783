//! Web facade re-exposing the decoded Balance Sheet.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use xero_core::ReportResponse;

use crate::client::XeroClient;
use crate::error::XeroError;

/// Build the facade router with the following routes:
/// - GET /balance
pub fn router(client: XeroClient) -> Router {
    Router::new()
        .route("/balance", get(balance_sheet_handler))
        .with_state(client)
}

/// Serve the GET "/balance" endpoint.
///
/// The report is re-serialized with its wire field names intact; errors are
/// rewritten into HTTP responses by the `IntoResponse` impl on [`XeroError`].
async fn balance_sheet_handler(
    State(client): State<XeroClient>,
    headers: HeaderMap,
) -> Result<Json<ReportResponse>, XeroError> {
    let agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    tracing::debug!(client = agent, "incoming HTTP request");

    let reports = client.balance_sheet().await?;

    Ok(Json(reports))
}
