//! # xero-http
//!
//! HTTP layer for the Balance Sheet service.
//!
//! This crate provides:
//! - A reqwest-based client for the Xero Reports endpoints
//! - The client error taxonomy and its mapping onto facade HTTP statuses
//! - An axum router re-exposing decoded reports at `GET /balance`
//!
//! ## Client example
//!
//! ```ignore
//! use xero_http::XeroClient;
//!
//! let client = XeroClient::new().with_base_url("http://mock-xero:3000");
//! let reports = client.balance_sheet().await?;
//! ```
//!
//! ## Facade example
//!
//! ```ignore
//! use xero_http::{router, XeroClient};
//!
//! let app = router(XeroClient::new());
//! axum::serve(listener, app).await?;
//! ```

mod client;
mod error;
mod server;

pub use client::{XeroClient, DEFAULT_BASE_URL};
pub use error::XeroError;
pub use server::router;
