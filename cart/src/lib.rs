//! Shopping cart reducer for the Composable Cart state layer.
//!
//! The cart is a pure state machine. The application's store owns the
//! current [`CartState`], hands it to [`CartReducer`] together with a
//! [`CartAction`], and keeps whatever comes back:
//!
//! - `CART_ADD` adds a quantity to a line, creating it if needed
//! - `CART_REMOVE` drops a line
//! - `CART_UPDATE` overwrites fields of a line
//! - `CART_SET_CURRENCY` reprices the cart in another currency
//! - `CART_EMPTY` resets to the initial cart
//!
//! Any other action leaves the state as it was.
//!
//! # Quick Start
//!
//! ```
//! use cart::{CartAction, CartReducer, CartState, ProductInfo};
//! use composable_cart_core::reducer::Reducer;
//!
//! let reducer = CartReducer::new();
//! let widget = ProductInfo::new("Widget").with_price("£", 10.0);
//!
//! let state = reducer.reduce(&CartState::default(), CartAction::add("a1", 1, widget.clone()));
//! let state = reducer.reduce(&state, CartAction::add("a1", 2, widget));
//!
//! assert_eq!(state.quantity_of("a1"), Some(3));
//! assert_eq!(state.total, 30.0);
//! assert_eq!(state.summary, "Widget: 3");
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod pricing;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use action::CartAction;
pub use config::CartConfig;
pub use error::CartError;
pub use pricing::{compute_summary, compute_total};
pub use reducer::CartReducer;
pub use types::{
    CartLineItem, CartState, Currency, DEFAULT_CURRENCY, LineItemPatch, ProductInfo, ProductKey,
    Products, Properties, is_selected, property_text,
};
