/// Report pipeline
///
/// Reader -> Parser -> Classifier -> Report, driven by a ReportConfig.
/// Each stage takes immutable input and returns a fresh value.
use crate::classify;
use crate::config::{OutputFormat, ReportConfig};
use crate::input;
use crate::parser;
use crate::report::{self, ReportRow};
use log::debug;
use std::io::{self, Write};

/// The finished report for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub rows: Vec<ReportRow>,
    pub total_products: usize,
    pub available_products: usize,
    pub min_stock: i64,
}

impl ReportOutcome {
    /// Rendered text lines, one per category
    pub fn lines(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.line.as_str()).collect()
    }

    /// JSON document for this report
    pub fn to_json(&self) -> serde_json::Value {
        report::render_json(&self.rows, self.total_products, self.available_products, self.min_stock)
    }
}

/// Read the configured input and build the report
pub fn run_report(config: &ReportConfig) -> Result<ReportOutcome, String> {
    let text = input::read_input(config.input.as_deref());
    build_report(&text, config)
}

/// Build the report from already-read input text
pub fn build_report(text: &str, config: &ReportConfig) -> Result<ReportOutcome, String> {
    debug!("Processing {} lines of input", text.lines().count());

    let parsed = parser::parse_input(text, config.parse_mode)?;
    let price_types = config.price_types(&parsed.price_types);
    let stats = classify::classify(&parsed.products, &price_types, config.min_stock);
    let available = classify::available_products(&parsed.products, config.min_stock).len();

    debug!("Built {} buckets for {} categories", stats.len(), price_types.len());

    Ok(ReportOutcome {
        rows: report::build_report_rows(&price_types, &stats),
        total_products: parsed.products.len(),
        available_products: available,
        min_stock: config.min_stock,
    })
}

/// Write the report to `out` in the configured format
pub fn write_report<W: Write>(outcome: &ReportOutcome, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in outcome.lines() {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &outcome.to_json())?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
