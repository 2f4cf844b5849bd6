//! Report generation module - rendering bucket statistics.
//!
//! This module handles:
//! - Price range calculation over a bucket's prices
//! - One display line per configured price type
//! - Export to JSON
//!
//! # Module Organization
//!
//! - `types` - Report row model (ReportRow)
//! - `stats` - Price range helpers
//! - `format` - Text line rendering
//! - `export` - JSON rendering and file export

mod export;
mod format;
mod stats;
mod types;

// Re-export types
pub use types::ReportRow;

// Re-export formatting functions
pub use format::build_report_rows;

// Re-export export functions
pub use export::{export_json_report, render_json};
