use std::collections::BTreeMap;

use crate::model::Record;

/// Pure reduction of a record sequence into the domain's dashboard
/// counters.
///
/// Deliberately scope-agnostic: the caller decides whether to pass the full
/// snapshot or a filtered view. Empty input is a valid case and produces
/// the `Default` (all-zero) counters.
pub trait Summarize: Sized {
    type Stats: Default;

    fn summarize(records: &[Self]) -> Self::Stats;
}

/// Count records per status label, in stable label order.
pub fn count_by_status<R: Record>(records: &[R]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.status_label()).or_insert(0) += 1;
    }
    counts
}
