use std::collections::HashMap;

use serde_json::Value;

use super::DataStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    collections: HashMap<&'static str, Vec<Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load<R: Record>(&self) -> Result<Vec<R>> {
        match self.collections.get(R::COLLECTION) {
            Some(rows) => rows
                .iter()
                .map(|row| serde_json::from_value(row.clone()).map_err(Into::into))
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    fn replace<R: Record>(&mut self, records: &[R]) -> Result<()> {
        let rows = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.collections.insert(R::COLLECTION, rows);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{GuestStatus, PaymentStatus, ReservationStatus, RoomStatus};
    use crate::test_fixtures::{guest_with, payment_with, reservation_with, room_with};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records<R: Record>(mut self, records: &[R]) -> Self {
            self.store.replace(records).unwrap();
            self
        }

        pub fn with_reservations(self, count: usize) -> Self {
            let records: Vec<_> = (1..=count)
                .map(|i| {
                    reservation_with(
                        &format!("res-{i}"),
                        ReservationStatus::Confirmed,
                        100.0 + i as f64,
                    )
                })
                .collect();
            self.with_records(&records)
        }

        pub fn with_rooms(self, count: usize) -> Self {
            let records: Vec<_> = (1..=count)
                .map(|i| room_with(&format!("room-{i}"), RoomStatus::Available, 180.0))
                .collect();
            self.with_records(&records)
        }

        pub fn with_guests(self, count: usize) -> Self {
            let records: Vec<_> = (1..=count)
                .map(|i| guest_with(&format!("guest-{i}"), "Test Guest", GuestStatus::Active))
                .collect();
            self.with_records(&records)
        }

        pub fn with_payments(self, count: usize) -> Self {
            let records: Vec<_> = (1..=count)
                .map(|i| payment_with(&format!("pay-{i}"), PaymentStatus::Completed, 100.0))
                .collect();
            self.with_records(&records)
        }
    }
}
