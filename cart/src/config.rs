//! Reducer configuration.

use crate::types::Currency;

/// Settings for [`CartReducer`](crate::CartReducer)
///
/// Opt-in only. [`CartReducer::new`](crate::CartReducer::new) uses the
/// default, under which a fresh or emptied cart is always in `"£"`. A store
/// that prices in another home currency can build its reducer with
/// [`CartReducer::with_config`](crate::CartReducer::with_config).
///
/// # Example
///
/// ```
/// use cart::{CartConfig, CartReducer};
///
/// let reducer = CartReducer::with_config(CartConfig::default().with_initial_currency("$"));
/// assert_eq!(reducer.initial_state().currency.as_str(), "$");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartConfig {
    /// Currency of a fresh cart and of a cart after `CART_EMPTY`
    pub initial_currency: Currency,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            initial_currency: Currency::default(),
        }
    }
}

impl CartConfig {
    /// Set the initial currency
    #[must_use]
    pub fn with_initial_currency(mut self, currency: impl Into<Currency>) -> Self {
        self.initial_currency = currency.into();
        self
    }
}
