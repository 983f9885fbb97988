//! Cart example binary
//!
//! Walks a cart through every action, then replays a JSON action log the way
//! an application store would deliver it.

use anyhow::Context;
use cart::{CartAction, CartReducer, CartState, LineItemPatch, ProductInfo, Properties};
use composable_cart_core::reducer::{Reducer, replay};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Actions as a store would dispatch them, including one meant for another reducer
const ACTION_LOG: &str = r#"[
    {"type": "@@INIT"},
    {"type": "CART_ADD", "id": "case", "quantity": 1, "properties": {},
     "productInfo": {"name": "MacBook case", "prices": {"£": 25, "$": 30}}},
    {"type": "CART_ADD", "id": "west", "quantity": 1,
     "properties": {"finish": "nickel finish", "size": "XS:31”", "engraving": null},
     "productInfo": {"name": "The West End", "prices": {"£": 120, "$": 150}}},
    {"type": "USER_LOGGED_IN", "user": "guest"},
    {"type": "CART_SET_CURRENCY", "currency": "$"}
]"#;

fn print_state(label: &str, state: &CartState) {
    println!("\n>>> {label}");
    println!("  currency: {}", state.currency);
    println!("  total:    {}", state.total);
    println!("  summary:  {:?}", state.summary);
    for (key, item) in &state.products {
        println!("  - {key}: {} x {}", item.quantity, item.product_info.name);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cart=debug,composable_cart_core=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Cart Example: Composable Cart ===");

    let reducer = CartReducer::new();
    let widget = ProductInfo::new("Widget")
        .with_price("£", 10.0)
        .with_price("$", 12.5);

    let state = reducer.initial_state();
    print_state("Initial cart", &state);

    let state = reducer.reduce(&state, CartAction::add("a1", 1, widget.clone()));
    print_state("CART_ADD a1 x1", &state);

    let size_xs = Properties::from([("size".to_string(), serde_json::json!("XS"))]);
    let state = reducer.reduce(&state, CartAction::add_variant("a1", 2, size_xs, widget));
    print_state("CART_ADD a1 (size XS) x2", &state);

    let state = reducer.reduce(&state, CartAction::update("a1", LineItemPatch::quantity(5)));
    print_state("CART_UPDATE a1 quantity=5 (summary is carried forward)", &state);

    let state = reducer.reduce(&state, CartAction::set_currency("$"));
    print_state("CART_SET_CURRENCY $", &state);

    let state = reducer.reduce(&state, CartAction::remove_key("a1_XS"));
    print_state("CART_REMOVE a1_XS", &state);

    let state = reducer.reduce(&state, CartAction::empty());
    print_state("CART_EMPTY", &state);

    let actions: Vec<CartAction> =
        serde_json::from_str(ACTION_LOG).context("built-in action log is not valid")?;
    let replayed = replay(&reducer, reducer.initial_state(), actions);
    print_state("Replayed action log", &replayed);
    println!("\n{}", replayed.to_json()?);

    println!("\n=== Demonstration Complete ===");
    Ok(())
}
