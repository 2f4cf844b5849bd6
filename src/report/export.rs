//! Report export to JSON.
//!
//! The JSON document carries the same rows as the text report plus the
//! run totals, so it can be consumed by other tools.

use super::types::ReportRow;
use std::fs::File;
use std::path::Path;

/// Build the JSON report document.
///
/// # Arguments
/// * `rows` - Report rows in display order
/// * `total_products` - Number of parsed product records
/// * `available_products` - Number of products meeting the stock threshold
/// * `min_stock` - Stock threshold used for this run
pub fn render_json(
    rows: &[ReportRow],
    total_products: usize,
    available_products: usize,
    min_stock: i64,
) -> serde_json::Value {
    use serde_json::json;

    json!({
        "total_products": total_products,
        "available_products": available_products,
        "min_stock": min_stock,
        "categories": rows,
    })
}

/// Write the JSON report to `output_path`.
pub fn export_json_report(report: &serde_json::Value, output_path: &Path) -> std::io::Result<()> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, report)?;

    Ok(())
}
