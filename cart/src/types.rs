//! Domain types for the cart.
//!
//! A cart is a set of line items keyed by [`ProductKey`], plus two values
//! derived from them: the total in the active currency and a one-line
//! summary. The derived values are refreshed by the reducer, not by these
//! types.

use crate::error::CartError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Borrow;
use std::collections::HashMap;

/// Currency a fresh cart starts in
pub const DEFAULT_CURRENCY: &str = "£";

/// Property name to selected value, in selection order
///
/// Values are whatever the store sent: strings, numbers, booleans or null.
pub type Properties = IndexMap<String, Value>;

/// Cart lines, in cart order
pub type Products = IndexMap<ProductKey, CartLineItem>;

/// Text of a property value as it appears in keys and summaries
///
/// Strings are used as they are, null becomes the empty string, and
/// numbers and booleans use their usual spelling. Arrays join their
/// elements with `,`; objects render as `[object Object]`.
#[must_use]
pub fn property_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
            }
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(property_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Whether a property value is shown in the summary
///
/// `null`, `false`, `0` and `""` are blank selections and are skipped.
#[must_use]
pub fn is_selected(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Currency code or symbol used to look up prices
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a cart line
///
/// Two additions with the same product id and the same property values land
/// on the same key and merge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(String);

impl ProductKey {
    /// Wraps an explicit key
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derives the key for a line
    ///
    /// A non-empty explicit `key` wins. Otherwise the key is `id`, followed by
    /// `_` and the property values joined with `_` when there are any
    /// properties. Blank values still take part in the join, as empty text.
    #[must_use]
    pub fn derive(id: &str, key: Option<&str>, properties: &Properties) -> Self {
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            return Self::new(key);
        }

        if properties.is_empty() {
            return Self::new(id);
        }

        let values: Vec<String> = properties.values().map(property_text).collect();
        Self(format!("{id}_{}", values.join("_")))
    }

    /// Returns the key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product metadata carried on each line
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInfo {
    /// Display name used in the summary
    pub name: String,
    /// Unit price per currency
    pub prices: HashMap<Currency, f64>,
}

impl ProductInfo {
    /// Creates product info with no prices
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prices: HashMap::new(),
        }
    }

    /// Adds or replaces the unit price in `currency`
    #[must_use]
    pub fn with_price(mut self, currency: impl Into<Currency>, price: f64) -> Self {
        self.prices.insert(currency.into(), price);
        self
    }

    /// Unit price in `currency`, if the product has one
    #[must_use]
    pub fn price_in(&self, currency: &Currency) -> Option<f64> {
        self.prices.get(currency).copied()
    }
}

/// One purchasable configuration and how many of it are in the cart
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Base product identifier
    #[serde(default)]
    pub id: String,
    /// Count of this configuration; not clamped
    #[serde(default)]
    pub quantity: i64,
    /// Selected variant properties
    #[serde(default)]
    pub properties: Properties,
    /// Embedded product metadata
    #[serde(default)]
    pub product_info: ProductInfo,
}

/// Field overwrites for an existing line (`updateProps`)
///
/// Each present field replaces the line's field wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPatch {
    /// New product identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// New property selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    /// New product metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_info: Option<ProductInfo>,
}

impl LineItemPatch {
    /// Patch that only sets the quantity
    #[must_use]
    pub const fn quantity(quantity: i64) -> Self {
        Self {
            id: None,
            quantity: Some(quantity),
            properties: None,
            product_info: None,
        }
    }

    /// Overwrites the fields present in the patch
    pub fn apply_to(self, item: &mut CartLineItem) {
        if let Some(id) = self.id {
            item.id = id;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(properties) = self.properties {
            item.properties = properties;
        }
        if let Some(product_info) = self.product_info {
            item.product_info = product_info;
        }
    }
}

/// The cart
///
/// `total` and `summary` are derived from `products`. A state value is never
/// edited in place by the reducer; every transition yields a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Sum of `quantity × unit price` in `currency`; NaN when a price is missing
    #[serde(default, deserialize_with = "nan_from_null")]
    pub total: f64,
    /// Per-line descriptions joined with `"; "`
    #[serde(default)]
    pub summary: String,
    /// Lines keyed by product key
    #[serde(default)]
    pub products: Products,
    /// Active currency
    #[serde(default)]
    pub currency: Currency,
}

impl Default for CartState {
    fn default() -> Self {
        Self::with_currency(Currency::default())
    }
}

impl CartState {
    /// Empty cart in `currency`
    #[must_use]
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            total: 0.0,
            summary: String::new(),
            products: IndexMap::new(),
            currency,
        }
    }

    /// Number of distinct lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.products.len()
    }

    /// Whether the cart has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the line under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CartLineItem> {
        self.products.get(key)
    }

    /// Quantity on the line under `key`
    #[must_use]
    pub fn quantity_of(&self, key: &str) -> Option<i64> {
        self.get(key).map(|item| item.quantity)
    }

    /// Parses a state previously produced by [`CartState::to_json`]
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidState`] if the JSON does not describe a cart.
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        serde_json::from_str(json).map_err(CartError::InvalidState)
    }

    /// Serializes the state; a NaN total is written as `null`
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CartError> {
        serde_json::to_string(self).map_err(CartError::Encode)
    }
}

// serde_json writes non-finite floats as null
fn nan_from_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
