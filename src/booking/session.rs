//! Per-session booking state.
//!
//! Each browser session gets its own independent [`BookingState`], created on
//! demand and addressed by an opaque [`SessionId`]. The store is explicitly
//! constructed and explicitly passed (it lives in the server's shared state),
//! never a hidden process-wide singleton, so concurrent sessions cannot
//! cross-contaminate.

use super::actions::BookingAction;
use super::reducer::{BookingReducer, Transition};
use super::state::BookingState;
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Opaque identifier for one client session's booking selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random `SessionId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a session id from its URL form.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All live booking selections, one per session.
#[derive(Debug, Default)]
pub struct Sessions {
    reducer: BookingReducer,
    states: Mutex<HashMap<SessionId, BookingState>>,
}

impl Sessions {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session with the empty initial selection.
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        self.lock().insert(id, BookingState::new());
        id
    }

    /// Returns a snapshot of a session's current selection.
    #[must_use]
    pub fn snapshot(&self, id: SessionId) -> Option<BookingState> {
        self.lock().get(&id).cloned()
    }

    /// Dispatches an action to a session's state machine.
    ///
    /// Returns the reported transition together with a snapshot of the state
    /// after the dispatch, or `None` if the session does not exist.
    pub fn dispatch(
        &self,
        id: SessionId,
        action: BookingAction,
    ) -> Option<(Transition, BookingState)> {
        let mut states = self.lock();
        let state = states.get_mut(&id)?;
        let transition = self.reducer.reduce(state, action);
        Some((transition, state.clone()))
    }

    /// Number of live sessions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, BookingState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
