//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use composable_cart_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S, &S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Several `when_action` calls are applied in order, each to the result of
/// the previous one. State assertions receive the state before the first
/// action and the state after the last.
///
/// # Example
///
/// ```ignore
/// use composable_cart_testing::ReducerTest;
///
/// ReducerTest::new(CartReducer::new())
///     .given_state(CartState::default())
///     .when_action(CartAction::add("a1", 1, widget()))
///     .then_state(|state| {
///         assert_eq!(state.total, 10.0);
///     })
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    initial_state: Option<R::State>,
    actions: Vec<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
    R::State: Clone,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Queue an action to apply (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Queue several actions to apply in order (When)
    #[must_use]
    pub fn when_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = R::Action>,
    {
        self.actions.extend(actions);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions
            .push(Box::new(move |_before: &R::State, after: &R::State| {
                assertion(after);
            }));
        self
    }

    /// Add an assertion comparing the state before and after (Then)
    #[must_use]
    pub fn then_transition<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State, &R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the initial state or no action is set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let before = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let reducer = self.reducer;
        let after = self
            .actions
            .into_iter()
            .fold(before.clone(), |state, action| reducer.reduce(&state, action));

        for assertion in self.state_assertions {
            assertion(&before, &after);
        }
    }
}

/// Helper assertions for reducer outputs
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that a transition left the state exactly as it was
    ///
    /// # Panics
    ///
    /// Panics if `before` and `after` differ.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unchanged<S: PartialEq + Debug>(before: &S, after: &S) {
        assert_eq!(
            before, after,
            "Expected the reducer to return the state unchanged"
        );
    }

    /// Assert that two floats are equal within `1e-9`
    ///
    /// NaN never compares equal, so a contaminated total fails here.
    ///
    /// # Panics
    ///
    /// Panics if the values differ.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {expected}, but found {actual}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_cart_core::reducer::Reducer;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Ignore,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State {
            match action {
                TestAction::Increment => TestState {
                    count: state.count + 1,
                },
                TestAction::Decrement => TestState {
                    count: state.count - 1,
                },
                TestAction::Ignore => state.clone(),
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_applies_actions_in_sequence() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .when_actions([TestAction::Decrement, TestAction::Decrement])
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn test_then_transition_sees_original_state() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 7 })
            .when_action(TestAction::Ignore)
            .then_transition(assertions::assert_unchanged)
            .run();
    }

    #[test]
    #[should_panic(expected = "unchanged")]
    fn test_assert_unchanged_rejects_changes() {
        assertions::assert_unchanged(&TestState { count: 1 }, &TestState { count: 2 });
    }

    #[test]
    fn test_assert_close() {
        assertions::assert_close(0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic(expected = "Expected")]
    fn test_assert_close_rejects_nan() {
        assertions::assert_close(f64::NAN, 0.0);
    }
}
