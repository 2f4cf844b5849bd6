/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments and the environment
/// - Choosing the parse mode and output format
/// - Resolving the category list used for the report
use crate::cli::CliArgs;
use crate::types::{ParseMode, PriceType};
use log::debug;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

/// Environment variable consulted when no input path is given
pub const INPUT_ENV_VAR: &str = "PRICE_REPORT_INPUT";

/// Where the report lines go on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the report categories come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTypeSource {
    /// The built-in normal / clearance / in-cart list
    Fixed,
    /// `Type` lines in the input, falling back to the built-in list
    Input,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub input: Option<PathBuf>,
    pub min_stock: i64,
    pub parse_mode: ParseMode,
    pub output_format: OutputFormat,
    pub json_export: Option<PathBuf>,
    pub price_type_source: PriceTypeSource,
}

impl ReportConfig {
    /// Categories to report, in display order
    ///
    /// `declared` are the `Type` records found in the input. They are only
    /// used with `PriceTypeSource::Input`; duplicate keys keep the first
    /// declaration.
    pub fn price_types(&self, declared: &[PriceType]) -> Vec<PriceType> {
        if self.price_type_source == PriceTypeSource::Fixed || declared.is_empty() {
            return PriceType::defaults();
        }

        let mut seen: HashSet<&str> = HashSet::new();
        declared.iter().filter(|t| seen.insert(t.key.as_str())).cloned().collect()
    }
}

/// Build a complete ReportConfig from CLI arguments
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    resolve_config(args, env::var(INPUT_ENV_VAR).ok())
}

/// Resolve configuration with an explicit value for the input env var
fn resolve_config(args: &CliArgs, env_input: Option<String>) -> Result<ReportConfig, String> {
    debug!("Building report config from CLI args");

    args.validate()?;

    let input = match (&args.input, env_input) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(value)) if !value.trim().is_empty() => {
            debug!("Using input from {}: {}", INPUT_ENV_VAR, value);
            Some(PathBuf::from(value))
        }
        _ => None,
    };

    let parse_mode = if args.strict { ParseMode::Strict } else { ParseMode::Permissive };
    let output_format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let price_type_source = if args.use_input_types { PriceTypeSource::Input } else { PriceTypeSource::Fixed };

    debug!(
        "Resolved config: input={:?} min_stock={} mode={:?} format={:?} types={:?}",
        input, args.min_stock, parse_mode, output_format, price_type_source
    );

    Ok(ReportConfig {
        input,
        min_stock: args.min_stock,
        parse_mode,
        output_format,
        json_export: args.output_json.clone(),
        price_type_source,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
