//! Reducer logic for the cart.
//!
//! Every recognised action yields a fresh [`CartState`]. `total` and
//! `summary` are refreshed from the new lines, with two exceptions:
//! `CART_UPDATE` carries the previous summary forward, and
//! `CART_SET_CURRENCY` leaves the summary alone because currency does not
//! appear in it.

use crate::action::CartAction;
use crate::config::CartConfig;
use crate::pricing::{compute_summary, compute_total};
use crate::types::{CartLineItem, CartState, Currency, LineItemPatch, ProductKey, Products};
use composable_cart_core::reducer::Reducer;

/// Reducer for the cart
#[derive(Clone, Debug, Default)]
pub struct CartReducer {
    config: CartConfig,
}

impl CartReducer {
    /// Creates a reducer with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reducer with the given configuration
    #[must_use]
    pub const fn with_config(config: CartConfig) -> Self {
        Self { config }
    }

    /// The reducer's configuration
    #[must_use]
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    /// State of a fresh cart, and of any cart after `CART_EMPTY`
    ///
    /// Always in `"£"` unless the reducer was built with a non-default
    /// [`CartConfig`].
    #[must_use]
    pub fn initial_state(&self) -> CartState {
        CartState::with_currency(self.config.initial_currency.clone())
    }

    /// Action currency if present and non-empty, else the cart's
    fn resolve_currency(state: &CartState, currency: Option<Currency>) -> Currency {
        currency
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| state.currency.clone())
    }

    /// Builds a state whose derived fields match `products`
    fn priced(products: Products, currency: Currency) -> CartState {
        CartState {
            total: compute_total(&products, &currency),
            summary: compute_summary(&products),
            products,
            currency,
        }
    }

    fn add(
        state: &CartState,
        product_key: ProductKey,
        item: CartLineItem,
        currency: Currency,
    ) -> CartState {
        let existing = state.quantity_of(product_key.as_str()).unwrap_or(0);
        let item = CartLineItem {
            quantity: item.quantity.saturating_add(existing),
            ..item
        };

        let mut products = state.products.clone();
        products.shift_insert(0, product_key, item);
        Self::priced(products, currency)
    }

    fn remove(state: &CartState, product_key: &ProductKey, currency: Currency) -> CartState {
        let mut products = state.products.clone();
        products.shift_remove(product_key);
        Self::priced(products, currency)
    }

    fn update(
        state: &CartState,
        product_key: ProductKey,
        patch: LineItemPatch,
        currency: Currency,
    ) -> CartState {
        let mut products = state.products.clone();
        if let Some(item) = products.get_mut(&product_key) {
            patch.apply_to(item);
        } else {
            tracing::debug!(%product_key, "Updating a line that is not in the cart");
            let mut item = CartLineItem::default();
            patch.apply_to(&mut item);
            products.insert(product_key, item);
        }

        CartState {
            total: compute_total(&products, &currency),
            summary: state.summary.clone(),
            products,
            currency,
        }
    }
}

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State {
        let kind = action.kind();

        let next = match action {
            CartAction::Add {
                id,
                key,
                quantity,
                properties,
                product_info,
                currency,
            } => {
                let product_key = ProductKey::derive(&id, key.as_deref(), &properties);
                let currency = Self::resolve_currency(state, currency);
                let item = CartLineItem {
                    id,
                    quantity,
                    properties,
                    product_info,
                };
                tracing::debug!(kind, %product_key, quantity, "Adding to cart");
                Self::add(state, product_key, item, currency)
            },

            CartAction::Remove {
                id,
                key,
                properties,
                currency,
            } => {
                let product_key = ProductKey::derive(&id, key.as_deref(), &properties);
                let currency = Self::resolve_currency(state, currency);
                tracing::debug!(kind, %product_key, "Removing from cart");
                Self::remove(state, &product_key, currency)
            },

            CartAction::Update {
                id,
                key,
                properties,
                update_props,
                currency,
            } => {
                let product_key = ProductKey::derive(&id, key.as_deref(), &properties);
                let currency = Self::resolve_currency(state, currency);
                tracing::debug!(kind, %product_key, "Updating cart line");
                Self::update(state, product_key, update_props, currency)
            },

            CartAction::SetCurrency { currency } => {
                let currency = Self::resolve_currency(state, currency);
                tracing::debug!(kind, %currency, "Setting cart currency");
                CartState {
                    total: compute_total(&state.products, &currency),
                    summary: state.summary.clone(),
                    products: state.products.clone(),
                    currency,
                }
            },

            CartAction::Empty => {
                tracing::debug!(kind, "Emptying cart");
                self.initial_state()
            },

            CartAction::Unrecognized => {
                tracing::trace!("Ignoring action the cart does not handle");
                return state.clone();
            },
        };

        tracing::debug!(
            kind,
            lines = next.line_count(),
            total = next.total,
            currency = %next.currency,
            "Cart reduced"
        );
        next
    }
}
