//! # Composable Cart Testing
//!
//! Testing utilities and helpers for the Composable Cart state layer.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for pure reducers
//! - Assertion helpers for reducer outputs
//! - Tracing setup for tests that want to see reducer logs
//!
//! ## Example
//!
//! ```ignore
//! use composable_cart_testing::ReducerTest;
//!
//! ReducerTest::new(CartReducer::new())
//!     .given_state(CartState::default())
//!     .when_action(CartAction::empty())
//!     .then_state(|state| assert!(state.is_empty()))
//!     .run();
//! ```

pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Install a `fmt` subscriber for tests
///
/// Honours `RUST_LOG` and falls back to `debug`. Safe to call from many
/// tests; only the first call installs anything.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
