//! Derived values: cart total and summary text.

use crate::types::{Currency, Products, is_selected, property_text};

/// Sum of `quantity × unit price` over all lines
///
/// Returns positive `0.0` for an empty cart. A line with no price in
/// `currency` contributes NaN, which carries through to the result.
#[must_use]
#[allow(clippy::cast_precision_loss)] // quantities are far below 2^53
pub fn compute_total(products: &Products, currency: &Currency) -> f64 {
    products
        .iter()
        .map(|(key, item)| match item.product_info.price_in(currency) {
            Some(price) => item.quantity as f64 * price,
            None => {
                tracing::warn!(
                    product_key = %key,
                    currency = %currency,
                    "Line has no price in the active currency"
                );
                f64::NAN
            },
        })
        // `Sum` for f64 starts at -0.0
        .fold(0.0, |sum, term| term + sum)
}

/// Human-readable description of all lines
///
/// Each line renders as `name: quantity` followed by its selected property
/// values, space separated. Blank values (`null`, `false`, `0`, `""`) are
/// left out. Lines are joined with `"; "` in cart order.
///
/// # Example
///
/// ```
/// use cart::{CartLineItem, ProductInfo, ProductKey, Products, compute_summary};
///
/// let mut products = Products::new();
/// products.insert(
///     ProductKey::new("a1"),
///     CartLineItem {
///         id: "a1".to_string(),
///         quantity: 2,
///         properties: [("size".to_string(), serde_json::json!("XS"))].into(),
///         product_info: ProductInfo::new("Widget"),
///     },
/// );
///
/// assert_eq!(compute_summary(&products), "Widget: 2 XS");
/// ```
#[must_use]
pub fn compute_summary(products: &Products) -> String {
    products
        .values()
        .map(|item| {
            let mut line = format!("{}: {}", item.product_info.name, item.quantity);
            for value in item.properties.values().filter(|v| is_selected(v)) {
                line.push(' ');
                line.push_str(&property_text(value));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("; ")
}
