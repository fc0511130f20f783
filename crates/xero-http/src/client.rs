//! Reqwest-based client for the Xero accounting API.

use std::time::Duration;

use reqwest::{header, Client};
use xero_core::{decode_envelope, decode_reports, ReportResponse};

use crate::error::XeroError;

/// Default production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.xero.com";

const BALANCE_SHEET_PATH: &str = "/api.xro/2.0/Reports/BalanceSheet";

/// Client for the Xero Reports endpoints.
///
/// A zero-config instance talks to the production host; the base URL and
/// the underlying transport can both be swapped after construction. The
/// client is cheap to clone and safe to share across tasks; configuration
/// is fixed once calls are in flight.
///
/// # Example
///
/// ```ignore
/// use xero_http::XeroClient;
///
/// let client = XeroClient::new().with_base_url("http://mock-xero:3000");
/// let reports = client.balance_sheet().await?;
/// ```
#[derive(Debug, Clone)]
pub struct XeroClient {
    base: String,
    client: Client,
}

impl XeroClient {
    /// Create a new Xero client with default configuration.
    pub fn new() -> Self {
        tracing::debug!("initialising new Xero HTTP client");

        Self {
            base: DEFAULT_BASE_URL.to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap(),
        }
    }

    /// Set the client's base URL.
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set the client's underlying transport, e.g. one with a shorter
    /// timeout.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Invoke the Reports BalanceSheet endpoint and return the decoded
    /// report list.
    ///
    /// See <https://developer.xero.com/documentation/api/accounting/reports#balance-sheet>
    pub async fn balance_sheet(&self) -> Result<ReportResponse, XeroError> {
        let url = format!("{}{}", self.base, BALANCE_SHEET_PATH);

        tracing::debug!(endpoint = %url, "outgoing HTTP request");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(XeroError::RequestFailure)?;

        let status = response.status();

        tracing::debug!(status = %status, "HTTP request finished");

        match status.as_u16() {
            200 => {}
            400 => return Err(XeroError::InvalidRequest),
            429 => return Err(XeroError::TooManyRequests),
            code if code >= 500 => return Err(XeroError::XeroDown),
            code => return Err(XeroError::UnexpectedStatus(code)),
        }

        let body = response.bytes().await.map_err(XeroError::RequestFailure)?;

        decode_envelope(&body)?;
        let reports = decode_reports(&body)?;

        Ok(reports)
    }
}

impl Default for XeroClient {
    fn default() -> Self {
        Self::new()
    }
}
