use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::Record;
use crate::query::stats::{count_by_status, Summarize};
use crate::query::{filter, FilterCriteria};
use crate::store::DataStore;

/// Compute the domain's summary counters.
///
/// The aggregation itself is scope-agnostic; this command makes the scope
/// explicit: no criteria means the full snapshot (what the dashboard cards
/// show), criteria mean the currently filtered view.
pub fn run<R, S>(store: &S, criteria: Option<&FilterCriteria>) -> Result<R::Stats>
where
    R: Record + Summarize,
    S: DataStore,
{
    let records = store.load::<R>()?;
    match criteria {
        Some(criteria) => {
            filter::validate::<R>(criteria)?;
            Ok(R::summarize(&filter::apply(&records, criteria)))
        }
        None => Ok(R::summarize(&records)),
    }
}

/// Per-status record counts over the full snapshot.
pub fn breakdown<R: Record, S: DataStore>(store: &S) -> Result<BTreeMap<&'static str, usize>> {
    let records = store.load::<R>()?;
    Ok(count_by_status(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Payment, PaymentStats, PaymentStatus};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::test_fixtures::payment_with;

    fn store_fixture() -> StoreFixture {
        StoreFixture::new().with_records(&[
            payment_with("pay-1", PaymentStatus::Completed, 300.0),
            payment_with("pay-2", PaymentStatus::Pending, 120.0),
            payment_with("pay-3", PaymentStatus::Completed, 80.0),
        ])
    }

    #[test]
    fn default_scope_is_the_full_snapshot() {
        let fixture = store_fixture();
        let stats: PaymentStats = run::<Payment, _>(&fixture.store, None).unwrap();
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total_revenue, 380.0);
        assert_eq!(stats.pending, 1);
    }

    #[test]
    fn criteria_narrow_the_scope_to_the_filtered_view() {
        let fixture = store_fixture();
        let criteria = FilterCriteria::new().with_status("pending");
        let stats: PaymentStats = run::<Payment, _>(&fixture.store, Some(&criteria)).unwrap();
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.total_revenue, 0.0);
    }

    #[test]
    fn breakdown_counts_every_status_present() {
        let fixture = store_fixture();
        let counts = breakdown::<Payment, _>(&fixture.store).unwrap();
        assert_eq!(counts.get("completed"), Some(&2));
        assert_eq!(counts.get("pending"), Some(&1));
    }
}
