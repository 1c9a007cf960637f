//! Test support: a fluent reducer harness and domain fixtures.
//!
//! Used by the unit tests at the bottom of the domain modules and by the
//! integration tests under `tests/`. Not intended for production code paths.

use crate::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for outcome assertion functions
type OutcomeAssertion<O> = Box<dyn FnOnce(&O)>;

/// Fluent API for testing reducers with Given-When-Then syntax.
///
/// # Example
///
/// ```ignore
/// ReducerTest::new(BookingReducer::new())
///     .given_state(BookingState::new())
///     .when_action(BookingAction::ClearSeats)
///     .then_state(|state| assert!(state.selected_seats.is_empty()))
///     .then_outcome(|outcome| assert!(outcome.is_applied()))
///     .run();
/// ```
pub struct ReducerTest<R, S, A, O>
where
    R: Reducer<State = S, Action = A, Outcome = O>,
{
    reducer: R,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    outcome_assertions: Vec<OutcomeAssertion<O>>,
}

impl<R, S, A, O> ReducerTest<R, S, A, O>
where
    R: Reducer<State = S, Action = A, Outcome = O>,
{
    /// Create a new reducer test with the given reducer.
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            outcome_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given).
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When).
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then).
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the reported outcome (Then).
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&O) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions.
    ///
    /// # Panics
    ///
    /// Panics if initial state or action is not set, or if any assertion
    /// fails.
    #[allow(clippy::expect_used, clippy::panic)] // Test harness can panic
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");
        let action = self.action.expect("Action must be set with when_action()");

        let outcome = self.reducer.reduce(&mut state, action);

        for assertion in self.state_assertions {
            assertion(&state);
        }
        for assertion in self.outcome_assertions {
            assertion(&outcome);
        }
    }
}

/// Canned domain values for tests.
pub mod fixtures {
    use crate::types::{
        Money, Movie, MovieId, Seat, SeatId, SeatStatus, Showtime, ShowtimeId, Theater, TheaterId,
        TheaterStatus,
    };
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::BTreeMap;

    /// A minimal movie with the given id.
    #[must_use]
    pub fn movie(id: &str) -> Movie {
        Movie {
            id: MovieId::from(id),
            title: format!("Movie {id}"),
            poster: format!("/movie-{id}-poster.jpg"),
            background_image: format!("/movie-{id}-background.jpg"),
            genre: vec!["Drama".to_string()],
            duration: 120,
            language: "English".to_string(),
            rating: 8.0,
            description: String::new(),
            release_date: NaiveDate::default(),
            studio: "Studio".to_string(),
        }
    }

    /// A minimal active theater with the given id.
    #[must_use]
    pub fn theater(id: &str) -> Theater {
        Theater {
            id: TheaterId::from(id),
            name: format!("Theater {id}"),
            location: "123 Main Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: format!("theater{id}@example.com"),
            capacity: 200,
            screens: 6,
            features: vec!["IMAX".to_string()],
            operating_hours: BTreeMap::new(),
            image: String::new(),
            status: TheaterStatus::Active,
        }
    }

    /// A showtime with the given id, movie, and theater.
    #[must_use]
    pub fn showtime(id: &str, movie_id: &str, theater_id: &str) -> Showtime {
        Showtime {
            id: ShowtimeId::from(id),
            movie_id: MovieId::from(movie_id),
            theater_id: TheaterId::from(theater_id),
            date: NaiveDate::default(),
            time: NaiveTime::default(),
            price: Money::from_rupees(250),
        }
    }

    /// An available seat with the given id and whole-rupee price.
    ///
    /// The row letter and number are derived from the id (`"A1"` → row A,
    /// number 1).
    #[must_use]
    pub fn seat(id: &str, rupees: u64) -> Seat {
        let row = id.chars().take(1).collect::<String>();
        let number = id[1..].parse().unwrap_or(1);
        Seat {
            id: SeatId::from(id),
            row,
            number,
            status: SeatStatus::Available,
            price: Money::from_rupees(rupees),
        }
    }
}
