//! Confirmed bookings and their confirmation tokens.
//!
//! A confirmation id is an opaque, timestamp-derived token (`TB<epoch-millis>`)
//! minted when a selection is confirmed. The registry stores the confirmed
//! snapshot so the confirmation page can look it up again by id.

use crate::clock::Clock;
use crate::types::{BookingId, Money, Movie, Seat, Showtime, Theater};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Snapshot of a confirmed booking, retrievable by confirmation id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// The confirmation token
    pub id: BookingId,
    /// Movie that was booked
    pub movie: Movie,
    /// Theater hosting the showing
    pub theater: Theater,
    /// The showing itself
    pub showtime: Showtime,
    /// Seats taken by this booking
    pub seats: Vec<Seat>,
    /// Sum of the seat prices
    pub total_price: Money,
    /// When the booking was confirmed
    pub confirmed_at: DateTime<Utc>,
}

/// Everything the registry needs to confirm a selection.
///
/// The caller (the confirm endpoint) has already performed the conditional
/// seat write against the inventory; this is the durable record of it.
#[derive(Clone, Debug)]
pub struct ConfirmedSelection {
    /// Movie that was booked
    pub movie: Movie,
    /// Theater hosting the showing
    pub theater: Theater,
    /// The showing itself
    pub showtime: Showtime,
    /// Seats taken by this booking
    pub seats: Vec<Seat>,
    /// Sum of the seat prices
    pub total_price: Money,
}

/// In-memory registry of confirmed bookings.
#[derive(Clone)]
pub struct BookingRegistry {
    clock: Arc<dyn Clock>,
    records: Arc<Mutex<HashMap<BookingId, BookingRecord>>>,
}

impl BookingRegistry {
    /// Creates an empty registry using the given clock for token minting.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Mints a confirmation id and stores the confirmed snapshot.
    pub fn confirm(&self, selection: ConfirmedSelection) -> BookingRecord {
        let now = self.clock.now();
        let mut records = self.lock();

        // Timestamp-derived token; same-millisecond collisions get bumped.
        let mut millis = now.timestamp_millis().max(0);
        let mut id = BookingId::new(format!("TB{millis}"));
        while records.contains_key(&id) {
            millis += 1;
            id = BookingId::new(format!("TB{millis}"));
        }

        let record = BookingRecord {
            id: id.clone(),
            movie: selection.movie,
            theater: selection.theater,
            showtime: selection.showtime,
            seats: selection.seats,
            total_price: selection.total_price,
            confirmed_at: now,
        };
        records.insert(id, record.clone());
        record
    }

    /// Looks up a confirmed booking by its confirmation id.
    #[must_use]
    pub fn get(&self, id: &BookingId) -> Option<BookingRecord> {
        self.lock().get(id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<BookingId, BookingRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::testing::fixtures;

    fn selection() -> ConfirmedSelection {
        ConfirmedSelection {
            movie: fixtures::movie("1"),
            theater: fixtures::theater("1"),
            showtime: fixtures::showtime("1", "1", "1"),
            seats: vec![fixtures::seat("A1", 250)],
            total_price: Money::from_rupees(250),
        }
    }

    #[test]
    fn confirmation_ids_are_timestamp_derived() {
        let clock = FixedClock::new(DateTime::from_timestamp_millis(1_754_500_000_000).unwrap());
        let registry = BookingRegistry::new(Arc::new(clock));
        let record = registry.confirm(selection());
        assert_eq!(record.id, BookingId::from("TB1754500000000"));
    }

    #[test]
    fn same_millisecond_confirmations_get_distinct_ids() {
        let clock = FixedClock::new(DateTime::from_timestamp_millis(1_754_500_000_000).unwrap());
        let registry = BookingRegistry::new(Arc::new(clock));
        let first = registry.confirm(selection());
        let second = registry.confirm(selection());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn records_round_trip_by_id() {
        let clock = FixedClock::new(DateTime::from_timestamp_millis(1_754_500_000_000).unwrap());
        let registry = BookingRegistry::new(Arc::new(clock));
        let record = registry.confirm(selection());
        assert_eq!(registry.get(&record.id), Some(record));
        assert!(registry.get(&BookingId::from("TB0")).is_none());
    }
}
