/// Core data structures for catalog records and price statistics
///
/// This module defines the records produced by the line parser and the
/// per-category statistics built by the classifier.
use std::collections::HashMap;

/// Bucket key for products sold at their regular price
pub const NORMAL_KEY: &str = "normal";

/// Bucket key for products whose clearance price undercuts the normal price
pub const CLEARANCE_KEY: &str = "clearance";

/// Bucket key for products whose price is only revealed in the cart
pub const PRICE_IN_CART_KEY: &str = "price_in_cart";

/// A declared price category: stable key plus the label shown in the report
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PriceType {
    pub key: String,          // "clearance"
    pub display_name: String, // "Clearance Price"
}

impl PriceType {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self { key: key.into(), display_name: display_name.into() }
    }

    /// The fixed category list, in report order
    pub fn defaults() -> Vec<PriceType> {
        vec![
            PriceType::new(NORMAL_KEY, "Normal Price"),
            PriceType::new(CLEARANCE_KEY, "Clearance Price"),
            PriceType::new(PRICE_IN_CART_KEY, "Price In Cart"),
        ]
    }
}

/// One product line from the catalog
///
/// Prices are NaN when their token did not parse; the stock count is None
/// in the same situation, which makes the product unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub normal_price: f64,
    pub clearance_price: f64,
    pub quantity_in_stock: Option<i64>,
    pub price_in_cart: bool,
}

impl Product {
    /// Check if enough units are in stock to be reported
    pub fn is_available(&self, min_stock: i64) -> bool {
        matches!(self.quantity_in_stock, Some(qty) if qty >= min_stock)
    }

    /// Check if the clearance price strictly undercuts the normal price
    ///
    /// Equal prices (and any NaN) count as normal.
    pub fn is_clearance(&self) -> bool {
        self.clearance_price < self.normal_price
    }
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    PriceType(PriceType),
    Product(Product),
}

/// How the parser treats malformed numeric and boolean tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed numbers become NaN / unknown stock and flow downstream
    #[default]
    Permissive,
    /// Lines with malformed tokens are rejected
    Strict,
}

/// Count and observed prices for one bucket
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct PriceTypeStats {
    pub count: usize,
    pub prices: Vec<f64>,
}

impl PriceTypeStats {
    /// Record one product, optionally with the price it sells at
    pub fn record(&mut self, price: Option<f64>) {
        self.count += 1;
        if let Some(price) = price {
            self.prices.push(price);
        }
    }
}

/// Bucket key -> statistics
pub type StatsMap = HashMap<String, PriceTypeStats>;
