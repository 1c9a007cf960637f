//! The booking state machine.
//!
//! One [`BookingState`] exists per client session and tracks the in-progress
//! ticket selection through the linear flow: movie → showtime/theater → seats
//! → confirmed booking id. It is mutated only through the fixed
//! [`BookingAction`] vocabulary, and every transition reports a [`Transition`]
//! outcome so callers can decide whether to surface a rejection.
//!
//! The state machine itself never performs I/O and never touches the shared
//! seat inventory; the conditional write that flips seats to booked at
//! confirmation time lives in [`crate::inventory`].

pub mod actions;
pub mod reducer;
pub mod session;
pub mod state;

pub use actions::BookingAction;
pub use reducer::{BookingReducer, RejectReason, Transition};
pub use session::{SessionId, Sessions};
pub use state::BookingState;
