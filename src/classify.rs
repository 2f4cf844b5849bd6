//! Price classification for available products.
//!
//! Products below the stock threshold are skipped entirely. Every remaining
//! product lands in exactly one of `normal` / `clearance`, and is also counted
//! under `price_in_cart` when its cart flag is set.

use crate::types::{CLEARANCE_KEY, NORMAL_KEY, PRICE_IN_CART_KEY, PriceType, PriceTypeStats, Product, StatsMap};
use log::debug;

/// Products with at least `min_stock` units on hand
pub fn available_products(products: &[Product], min_stock: i64) -> Vec<&Product> {
    products.iter().filter(|p| p.is_available(min_stock)).collect()
}

/// Build per-bucket statistics.
///
/// # Arguments
/// * `products` - All parsed products
/// * `price_types` - Declared categories; each gets an entry even if empty
/// * `min_stock` - Availability threshold
///
/// # Returns
/// A map from bucket key to count and prices. Normal and clearance buckets
/// record the clearance price; the in-cart bucket only counts.
pub fn classify(products: &[Product], price_types: &[PriceType], min_stock: i64) -> StatsMap {
    let mut stats: StatsMap = price_types.iter().map(|t| (t.key.clone(), PriceTypeStats::default())).collect();
    for key in [NORMAL_KEY, CLEARANCE_KEY, PRICE_IN_CART_KEY] {
        stats.entry(key.to_string()).or_default();
    }

    let available = available_products(products, min_stock);
    debug!("{} of {} products available (min stock {})", available.len(), products.len(), min_stock);

    for product in available {
        let key = if product.is_clearance() { CLEARANCE_KEY } else { NORMAL_KEY };
        stats.entry(key.to_string()).or_default().record(Some(product.clearance_price));

        if product.price_in_cart {
            stats.entry(PRICE_IN_CART_KEY.to_string()).or_default().record(None);
        }
    }

    stats
}
