//! Text rendering of category statistics.
//!
//! Line shape: `<displayName>: <count> product[s][ @ $<min>[-$<max>]]`

use super::stats::price_range;
use super::types::ReportRow;
use crate::types::{PriceType, PriceTypeStats, StatsMap};

/// Render the price suffix for a bucket's prices.
///
/// Empty when there are no prices, ` @ $min` when all prices agree to the
/// cent, ` @ $min-$max` otherwise.
pub fn format_price_suffix(prices: &[f64]) -> String {
    match price_range(prices) {
        None => String::new(),
        Some((min, max)) => {
            let min = format_price(min);
            let max = format_price(max);
            if min == max { format!(" @ ${}", min) } else { format!(" @ ${}-${}", min, max) }
        }
    }
}

/// Render a price to the cent, rounding halves away from zero.
///
/// Negative zero prints as `0.00`; NaN prints as `NaN`.
fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() / 100.0;
    let cents = if cents == 0.0 { 0.0 } else { cents };
    format!("{:.2}", cents)
}

/// Render one category line.
pub fn format_category_line(price_type: &PriceType, stats: &PriceTypeStats) -> String {
    let noun = if stats.count == 1 { "product" } else { "products" };
    format!("{}: {} {}{}", price_type.display_name, stats.count, noun, format_price_suffix(&stats.prices))
}

/// Build one report row per price type, in the given order.
///
/// A price type with no entry in `stats` renders as zero products.
pub fn build_report_rows(price_types: &[PriceType], stats: &StatsMap) -> Vec<ReportRow> {
    let empty = PriceTypeStats::default();

    price_types
        .iter()
        .map(|price_type| {
            let bucket = stats.get(&price_type.key).unwrap_or(&empty);
            let range = price_range(&bucket.prices).filter(|(min, max)| !min.is_nan() && !max.is_nan());

            ReportRow {
                key: price_type.key.clone(),
                display_name: price_type.display_name.clone(),
                count: bucket.count,
                min_price: range.map(|(min, _)| min),
                max_price: range.map(|(_, max)| max),
                line: format_category_line(price_type, bucket),
            }
        })
        .collect()
}
