//! Error types for the cart crate.
//!
//! Reduction itself never fails; these errors come from the JSON boundary
//! where actions and states enter or leave the process.

use thiserror::Error;

/// Errors produced when converting cart values to or from JSON
#[derive(Error, Debug)]
pub enum CartError {
    /// The input is not a well-formed cart action
    #[error("Invalid cart action: {0}")]
    InvalidAction(#[source] serde_json::Error),

    /// The input is not a well-formed cart state
    #[error("Invalid cart state: {0}")]
    InvalidState(#[source] serde_json::Error),

    /// A value could not be serialized
    #[error("Failed to encode cart value: {0}")]
    Encode(#[source] serde_json::Error),
}
