//! # Composable Cart Core
//!
//! Core traits for the Composable Cart state layer.
//!
//! A reducer here is a pure function `(State, Action) → State`. The surrounding
//! application owns the current state value, dispatches actions, and stores
//! whatever the reducer hands back. Nothing in this crate performs I/O.
//!
//! ## Core Concepts
//!
//! - **State**: Immutable domain value, replaced wholesale on every transition
//! - **Action**: A tagged description of what happened
//! - **Reducer**: Deterministic mapping from the previous state and an action
//!   to the next state
//!
//! ## Example
//!
//! ```
//! use composable_cart_core::reducer::{Reducer, replay};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Tally {
//!     count: i64,
//! }
//!
//! enum TallyAction {
//!     Add(i64),
//!     Clear,
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Action = TallyAction;
//!
//!     fn reduce(&self, state: &Tally, action: TallyAction) -> Tally {
//!         match action {
//!             TallyAction::Add(n) => Tally { count: state.count + n },
//!             TallyAction::Clear => Tally::default(),
//!         }
//!     }
//! }
//!
//! let end = replay(&TallyReducer, Tally::default(), [TallyAction::Add(2), TallyAction::Add(3)]);
//! assert_eq!(end.count, 5);
//! ```

/// Reducer module - The core trait for state transitions
///
/// Reducers are pure functions: `(State, Action) → State`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer produces
    /// - `Action`: The action type this reducer processes
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for CartReducer {
    ///     type State = CartState;
    ///     type Action = CartAction;
    ///
    ///     fn reduce(&self, state: &CartState, action: CartAction) -> CartState {
    ///         match action {
    ///             CartAction::Empty => self.initial_state(),
    ///             _ => state.clone(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// The previous state is only borrowed. Implementations must not rely
        /// on interior mutability to alter it, and must return the same
        /// output for the same inputs.
        fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
    }

    /// Fold a sequence of actions through a reducer
    ///
    /// This is what a state store does when it dispatches actions one after
    /// another: each result becomes the input state of the next call.
    pub fn replay<R, I>(reducer: &R, initial: R::State, actions: I) -> R::State
    where
        R: Reducer,
        I: IntoIterator<Item = R::Action>,
    {
        let mut applied = 0_usize;
        let state = actions.into_iter().fold(initial, |state, action| {
            applied += 1;
            reducer.reduce(&state, action)
        });
        tracing::trace!(applied, "Replayed actions");
        state
    }
}

pub use reducer::{Reducer, replay};
