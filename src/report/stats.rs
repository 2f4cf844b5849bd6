//! Price range statistics for a bucket.

/// Lowest and highest price in `prices`.
///
/// Returns `None` for an empty list. A NaN anywhere in the list makes both
/// ends NaN, so a malformed price shows up in the report instead of being
/// silently skipped.
pub fn price_range(prices: &[f64]) -> Option<(f64, f64)> {
    let (first, rest) = prices.split_first()?;

    let range = rest.iter().fold((*first, *first), |(min, max), &price| {
        if min.is_nan() || price.is_nan() {
            (f64::NAN, f64::NAN)
        } else {
            (min.min(price), max.max(price))
        }
    });

    Some(range)
}
