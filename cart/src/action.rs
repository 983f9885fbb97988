//! Cart actions.
//!
//! On the wire an action is a JSON object tagged by `"type"`. The five cart
//! tags map to variants; any other tag becomes [`CartAction::Unrecognized`]
//! so that a store broadcasting unrelated actions can still route them
//! through the cart reducer.

use crate::error::CartError;
use crate::types::{Currency, LineItemPatch, ProductInfo, ProductKey, Properties};
use serde::{Deserialize, Serialize};

/// Tag of [`CartAction::Add`]
pub const CART_ADD: &str = "CART_ADD";
/// Tag of [`CartAction::Remove`]
pub const CART_REMOVE: &str = "CART_REMOVE";
/// Tag of [`CartAction::Update`]
pub const CART_UPDATE: &str = "CART_UPDATE";
/// Tag of [`CartAction::SetCurrency`]
pub const CART_SET_CURRENCY: &str = "CART_SET_CURRENCY";
/// Tag of [`CartAction::Empty`]
pub const CART_EMPTY: &str = "CART_EMPTY";

/// Everything the cart reducer reacts to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CartAction {
    /// Add `quantity` of a configuration, merging with an existing line
    #[serde(rename = "CART_ADD", rename_all = "camelCase")]
    Add {
        /// Base product identifier
        #[serde(default)]
        id: String,
        /// Explicit product key, overriding derivation
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        /// Quantity to add
        quantity: i64,
        /// Selected variant properties
        #[serde(default)]
        properties: Properties,
        /// Product metadata stored on the line
        product_info: ProductInfo,
        /// Currency to switch to
        #[serde(default, skip_serializing_if = "Option::is_none")]
        currency: Option<Currency>,
    },

    /// Drop a line
    #[serde(rename = "CART_REMOVE", rename_all = "camelCase")]
    Remove {
        /// Base product identifier
        #[serde(default)]
        id: String,
        /// Explicit product key, overriding derivation
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        /// Variant properties used for key derivation
        #[serde(default)]
        properties: Properties,
        /// Currency to switch to
        #[serde(default, skip_serializing_if = "Option::is_none")]
        currency: Option<Currency>,
    },

    /// Overwrite fields of a line; does not refresh the summary
    #[serde(rename = "CART_UPDATE", rename_all = "camelCase")]
    Update {
        /// Base product identifier
        #[serde(default)]
        id: String,
        /// Explicit product key, overriding derivation
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        /// Variant properties used for key derivation
        #[serde(default)]
        properties: Properties,
        /// Fields to overwrite
        #[serde(default)]
        update_props: LineItemPatch,
        /// Currency to switch to
        #[serde(default, skip_serializing_if = "Option::is_none")]
        currency: Option<Currency>,
    },

    /// Switch currency and reprice
    #[serde(rename = "CART_SET_CURRENCY")]
    SetCurrency {
        /// New currency; the current one is kept when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        currency: Option<Currency>,
    },

    /// Reset to the initial cart
    #[serde(rename = "CART_EMPTY")]
    Empty,

    /// Any action the cart does not handle
    #[serde(other)]
    Unrecognized,
}

impl CartAction {
    /// Add `quantity` of a product with no variant properties
    #[must_use]
    pub fn add(id: impl Into<String>, quantity: i64, product_info: ProductInfo) -> Self {
        Self::add_variant(id, quantity, Properties::new(), product_info)
    }

    /// Add `quantity` of a product variant
    #[must_use]
    pub fn add_variant(
        id: impl Into<String>,
        quantity: i64,
        properties: Properties,
        product_info: ProductInfo,
    ) -> Self {
        Self::Add {
            id: id.into(),
            key: None,
            quantity,
            properties,
            product_info,
            currency: None,
        }
    }

    /// Remove the line derived from `id` with no properties
    #[must_use]
    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove {
            id: id.into(),
            key: None,
            properties: Properties::new(),
            currency: None,
        }
    }

    /// Remove the line stored under an explicit key
    #[must_use]
    pub fn remove_key(key: impl Into<String>) -> Self {
        Self::Remove {
            id: String::new(),
            key: Some(key.into()),
            properties: Properties::new(),
            currency: None,
        }
    }

    /// Patch the line stored under an explicit key
    #[must_use]
    pub fn update(key: impl Into<String>, update_props: LineItemPatch) -> Self {
        Self::Update {
            id: String::new(),
            key: Some(key.into()),
            properties: Properties::new(),
            update_props,
            currency: None,
        }
    }

    /// Switch the cart to `currency`
    #[must_use]
    pub fn set_currency(currency: impl Into<Currency>) -> Self {
        Self::SetCurrency {
            currency: Some(currency.into()),
        }
    }

    /// Reset the cart
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Attach a currency to an add, remove, update or set-currency action
    ///
    /// Other variants are returned as they are.
    #[must_use]
    pub fn with_currency(mut self, new_currency: impl Into<Currency>) -> Self {
        match &mut self {
            Self::Add { currency, .. }
            | Self::Remove { currency, .. }
            | Self::Update { currency, .. }
            | Self::SetCurrency { currency } => *currency = Some(new_currency.into()),
            Self::Empty | Self::Unrecognized => {},
        }
        self
    }

    /// The `"type"` tag, or `"UNRECOGNIZED"`
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => CART_ADD,
            Self::Remove { .. } => CART_REMOVE,
            Self::Update { .. } => CART_UPDATE,
            Self::SetCurrency { .. } => CART_SET_CURRENCY,
            Self::Empty => CART_EMPTY,
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Key of the line this action targets, for line-level actions
    #[must_use]
    pub fn product_key(&self) -> Option<ProductKey> {
        match self {
            Self::Add {
                id, key, properties, ..
            }
            | Self::Remove {
                id, key, properties, ..
            }
            | Self::Update {
                id, key, properties, ..
            } => Some(ProductKey::derive(id, key.as_deref(), properties)),
            Self::SetCurrency { .. } | Self::Empty | Self::Unrecognized => None,
        }
    }

    /// Parses a single action
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidAction`] if the JSON is malformed or a
    /// cart action is missing a required field.
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        serde_json::from_str(json).map_err(CartError::InvalidAction)
    }
}
