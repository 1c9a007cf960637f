//! The reducer abstraction: pure, synchronous state transitions.
//!
//! A reducer is a function `(State, Action) → Outcome` that mutates state in
//! place and reports what happened. There is no effect system here: every
//! transition in this service is a total, synchronous, in-memory update, so
//! the outcome is plain data the caller can inspect (or ignore).

/// Core trait for business-logic state machines.
///
/// # Example
///
/// ```ignore
/// impl Reducer for BookingReducer {
///     type State = BookingState;
///     type Action = BookingAction;
///     type Outcome = Transition;
///
///     fn reduce(&self, state: &mut BookingState, action: BookingAction) -> Transition {
///         // validate, then apply
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// What a single transition reports back to the caller
    type Outcome;

    /// Reduce an action into a state change and a reported outcome.
    ///
    /// This is a pure function over well-formed inputs:
    /// 1. Validates the action against the current state
    /// 2. Updates state in place only when the action is accepted
    /// 3. Returns an outcome describing what happened
    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Self::Outcome;
}
