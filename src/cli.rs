use clap::Parser;
use std::path::PathBuf;

/// Default minimum number of units on hand for a product to be reported
pub const DEFAULT_MIN_STOCK: i64 = 3;

#[derive(Parser, Debug, Clone)]
#[command(name = "price-report")]
#[command(about = "Summarize in-stock products by price status")]
#[command(version)]
pub struct CliArgs {
    /// Catalog file with `Type,...` and `Product,...` lines
    /// If omitted, PRICE_REPORT_INPUT is used; otherwise the input is empty
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Minimum units in stock for a product to be counted
    #[arg(long, default_value_t = DEFAULT_MIN_STOCK, value_name = "N")]
    pub min_stock: i64,

    /// Reject lines with malformed prices, quantities or cart flags
    /// instead of carrying NaN values into the report
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON instead of text lines
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this path
    #[arg(long, value_name = "PATH")]
    pub output_json: Option<PathBuf>,

    /// Take the category list from `Type` lines in the input
    /// Falls back to the built-in categories when the input declares none
    #[arg(long)]
    pub use_input_types: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.min_stock < 0 {
            return Err(format!("--min-stock must not be negative (got {})", self.min_stock));
        }

        if let Some(ref path) = self.output_json {
            if path.is_dir() {
                return Err(format!("--output-json points to a directory: {}", path.display()));
            }
        }

        Ok(())
    }
}
