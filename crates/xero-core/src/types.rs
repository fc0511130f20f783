//! Typed document tree for Xero report responses.
//!
//! Field names mirror the wire shape of the Reports endpoints verbatim so a
//! decoded report can be re-serialized for downstream consumers without
//! translation. Unknown upstream fields are ignored on decode.

use serde::{Deserialize, Serialize};

use crate::datetime::{self, DateTimeField};

/// Top-level container returned by the Reports endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Reports list.
    #[serde(rename = "Reports", default)]
    pub reports: Vec<Report>,
}

/// A single report with its breadcrumb titles and row tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Opaque upstream fields, preserved but not interpreted.
    #[serde(rename = "Fields", default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<serde_json::Value>,

    /// Report UUID.
    #[serde(rename = "ReportID", default)]
    pub report_id: String,

    /// Report human-readable label.
    #[serde(rename = "ReportName", default)]
    pub report_name: String,

    /// Report type (BalanceSheet, SalesTaxReturn, ProfitAndLoss, ...).
    #[serde(rename = "ReportType", default)]
    pub report_type: String,

    /// List of titles for usage with breadcrumbs.
    #[serde(rename = "ReportTitles", default)]
    pub report_titles: Vec<String>,

    /// Report human-readable date (25 August 2024).
    #[serde(rename = "ReportDate", default)]
    pub report_date: String,

    /// Report rows.
    #[serde(rename = "Rows", default)]
    pub rows: Vec<Row>,

    /// Report last update timestamp; `None` when the source field is empty.
    #[serde(
        rename = "UpdatedDateUTC",
        default,
        deserialize_with = "datetime::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_date_utc: Option<DateTimeField>,
}

/// One row of a report.
///
/// Section rows carry a title and nested child rows; for every other row
/// type the children are empty, which is the common case and not malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Row cells.
    #[serde(rename = "Cells", default)]
    pub cells: Vec<Cell>,

    /// Row type (Header, Row, Section, SummaryRow).
    #[serde(rename = "RowType", default)]
    pub row_type: String,

    /// Section children (only if the row type is Section).
    #[serde(rename = "Rows", default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Row>,

    /// Section title (only if the row type is Section).
    #[serde(rename = "Title", default)]
    pub title: String,
}

/// A single report cell with optional out-of-band metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell attributes, e.g. the account behind a figure.
    #[serde(
        rename = "Attributes",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attributes: Vec<Attribute>,

    /// Cell value.
    #[serde(rename = "Value", default)]
    pub value: String,
}

/// Key/value pair attached to a cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "ID", default)]
    pub id: String,

    #[serde(rename = "Value", default)]
    pub value: String,
}
