//! # Storage Layer
//!
//! The console treats each domain as a read-mostly snapshot: collections
//! are loaded whole, the pipeline runs over the owned copy, and mutations
//! write the collection back whole. [`DataStore`] abstracts where those
//! snapshots live:
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON array
//!   per collection (`reservations.json`, `rooms.json`, `guests.json`,
//!   `payments.json`) under the data directory.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! `load` always returns an owned `Vec` (copy-on-read). That snapshot is
//! the consistency guarantee the pipeline relies on: a delete landing
//! between two queries can never mutate a view a caller is still iterating.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface over the per-domain record collections.
pub trait DataStore {
    /// Load the domain's full collection as an owned snapshot, preserving
    /// stored order. A collection that was never written is empty, not an
    /// error.
    fn load<R: Record>(&self) -> Result<Vec<R>>;

    /// Replace the domain's collection wholesale.
    fn replace<R: Record>(&mut self, records: &[R]) -> Result<()>;
}
