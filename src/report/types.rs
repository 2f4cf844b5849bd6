//! Report row model.
//!
//! A `ReportRow` carries everything needed to render one category in any
//! output format: the rendered text line plus the raw numbers behind it.

/// One category in the finished report.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReportRow {
    /// Bucket key (e.g., "clearance")
    pub key: String,
    /// Label shown to the user (e.g., "Clearance Price")
    pub display_name: String,
    /// Number of available products in the bucket
    pub count: usize,
    /// Lowest recorded price; None when no prices were recorded or a price was malformed
    pub min_price: Option<f64>,
    /// Highest recorded price; None under the same conditions as `min_price`
    pub max_price: Option<f64>,
    /// Rendered text line
    pub line: String,
}
