/// Line parser for the catalog format
///
/// Each line is one comma-separated record:
/// - `Type,<key>,<displayName>`
/// - `Product,<normalPrice>,<clearancePrice>,<quantityInStock>,<priceInCart>`
///
/// Anything else is dropped. There is no quoting or escaping.
use crate::types::{ParseMode, PriceType, Product, Record};
use log::{debug, warn};

/// Records collected from a whole input text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInput {
    pub price_types: Vec<PriceType>,
    pub products: Vec<Product>,
}

/// Parse a single line into a record
///
/// Returns `Ok(None)` for lines that are not records (unknown tag, blank,
/// too few fields). In `ParseMode::Strict`, a record with a malformed
/// numeric or boolean token is an error; in permissive mode it parses with
/// NaN prices / unknown stock / `false` cart flag instead.
pub fn parse_line(line: &str, mode: ParseMode) -> Result<Option<Record>, String> {
    // The tag must match exactly; only field values are trimmed.
    let mut fields = line.split(',');
    let tag = fields.next().unwrap_or_default();
    let mut tokens: Vec<&str> = vec![tag];
    tokens.extend(fields.map(str::trim));

    match tokens.as_slice() {
        ["Type", key, display_name, ..] => Ok(Some(Record::PriceType(PriceType::new(*key, *display_name)))),
        ["Product", normal, clearance, quantity, in_cart, ..] => {
            let product = Product {
                normal_price: parse_decimal(normal, mode)?,
                clearance_price: parse_decimal(clearance, mode)?,
                quantity_in_stock: parse_quantity(quantity, mode)?,
                price_in_cart: parse_flag(in_cart, mode)?,
            };
            Ok(Some(Record::Product(product)))
        }
        _ => Ok(None),
    }
}

/// Parse every line of `text`
///
/// In strict mode every rejected line is logged, and the first one is
/// reported in the returned error once the whole text has been scanned.
pub fn parse_input(text: &str, mode: ParseMode) -> Result<ParsedInput, String> {
    let mut parsed = ParsedInput::default();
    let mut rejected: Vec<(usize, String)> = Vec::new();
    let mut dropped = 0;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match parse_line(line, mode) {
            Ok(Some(Record::PriceType(price_type))) => parsed.price_types.push(price_type),
            Ok(Some(Record::Product(product))) => parsed.products.push(product),
            Ok(None) => dropped += 1,
            Err(e) => {
                warn!("Rejected line {}: {}", line_no, e);
                rejected.push((line_no, e));
            }
        }
    }

    debug!(
        "Parsed {} price types and {} products ({} lines dropped)",
        parsed.price_types.len(),
        parsed.products.len(),
        dropped
    );

    if let Some((line_no, reason)) = rejected.first() {
        return Err(format!("{} malformed line(s) in input; first at line {}: {}", rejected.len(), line_no, reason));
    }

    Ok(parsed)
}

fn parse_decimal(token: &str, mode: ParseMode) -> Result<f64, String> {
    match token.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) if mode == ParseMode::Permissive => Ok(f64::NAN),
        Err(e) => Err(format!("invalid price '{}': {}", token, e)),
    }
}

fn parse_quantity(token: &str, mode: ParseMode) -> Result<Option<i64>, String> {
    match token.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) if mode == ParseMode::Permissive => Ok(None),
        Err(e) => Err(format!("invalid stock quantity '{}': {}", token, e)),
    }
}

fn parse_flag(token: &str, mode: ParseMode) -> Result<bool, String> {
    if token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if mode == ParseMode::Permissive || token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("invalid cart flag '{}': expected true or false", token))
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;
