//! # API Facade
//!
//! Single entry point for all frontdesk operations, generic over the
//! storage backend so the same facade serves the CLI against `FileStore`
//! and the tests against `InMemoryStore`.
//!
//! The facade only dispatches to the command layer and normalizes inputs;
//! business logic lives in `commands/*.rs` and each domain's model module.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::commands::{self, config::ConfigAction, seed::SeedSummary};
use crate::config::FrontdeskConfig;
use crate::error::Result;
use crate::model::{OccupancySnapshot, Record, Report, RevenuePoint};
use crate::query::stats::Summarize;
use crate::query::{DateRange, FilterCriteria, ListPage, PageRequest};
use crate::store::DataStore;

/// The main API facade for frontdesk operations.
///
/// Domain access is generic: `api.list::<Reservation>(...)`,
/// `api.set_status::<Room>(...)`, and so on — one pipeline, four domains.
pub struct FrontdeskApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> FrontdeskApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn list<R: Record>(
        &self,
        criteria: &FilterCriteria,
        request: &PageRequest,
    ) -> Result<ListPage<R>> {
        commands::list::run(&self.store, criteria, request)
    }

    pub fn view<R: Record>(&self, id: &str) -> Result<R> {
        commands::view::run(&self.store, id)
    }

    pub fn set_status<R: Record>(&mut self, id: &str, status: &str) -> Result<R> {
        commands::status::run(&mut self.store, id, status)
    }

    pub fn delete<R: Record>(&mut self, id: &str) -> Result<()> {
        commands::delete::run::<R, S>(&mut self.store, id)
    }

    /// Summary counters; pass criteria to aggregate over the filtered view
    /// instead of the full snapshot.
    pub fn stats<R: Record + Summarize>(
        &self,
        criteria: Option<&FilterCriteria>,
    ) -> Result<R::Stats> {
        commands::stats::run::<R, S>(&self.store, criteria)
    }

    pub fn status_breakdown<R: Record>(&self) -> Result<BTreeMap<&'static str, usize>> {
        commands::stats::breakdown::<R, S>(&self.store)
    }

    pub fn reports(&self, range: &DateRange) -> Result<Vec<Report>> {
        commands::report::daily(&self.store, range)
    }

    pub fn revenue_series(&self, range: &DateRange) -> Result<Vec<RevenuePoint>> {
        let rows = commands::report::daily(&self.store, range)?;
        Ok(commands::report::revenue_series(&rows))
    }

    pub fn occupancy(&self) -> Result<OccupancySnapshot> {
        commands::report::occupancy(&self.store)
    }

    pub fn export_payments(&self, criteria: &FilterCriteria) -> Result<String> {
        commands::export::payments_csv(&self.store, criteria)
    }

    pub fn seed(&mut self, seed: u64) -> Result<SeedSummary> {
        commands::seed::run(&mut self.store, seed)
    }

    pub fn config(&self, action: ConfigAction) -> Result<FrontdeskConfig> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<bool> {
        commands::init::run(&self.data_dir)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    // Kept for callers needing raw snapshots, e.g. reconciliation scripts.
    pub fn snapshot<R: Record>(&self) -> Result<Vec<R>> {
        self.store.load::<R>()
    }
}
