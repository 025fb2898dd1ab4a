//! # List Query Pipeline
//!
//! The one pipeline behind every list screen: filter a snapshot of records,
//! slice the result into a page, and report pagination metadata. Stats
//! aggregation ([`stats`]) and the page-number window ([`window`]) hang off
//! the same snapshot and metadata but run independently, exactly as the
//! console's screens use them.
//!
//! Every stage is a pure, synchronous function over an owned snapshot. The
//! pipeline never does I/O, never retries and holds no state between calls;
//! determinism is part of its contract and is what the tests lean on.

use crate::error::Result;
use crate::model::Record;

pub mod filter;
pub mod paginate;
pub mod stats;
pub mod window;

pub use filter::{DateRange, FilterCriteria};
pub use paginate::{PageInfo, PageRequest};

/// One page of records plus the metadata the UI needs to render paging
/// controls. `pagination.page` is the *effective* page after clamping;
/// callers must re-sync their state from it rather than assume an echo of
/// the request.
#[derive(Debug, Clone)]
pub struct ListPage<R> {
    pub rows: Vec<R>,
    pub pagination: PageInfo,
}

/// Run the full pipeline: validate criteria, filter, paginate.
pub fn run<R: Record>(
    records: &[R],
    criteria: &FilterCriteria,
    request: &PageRequest,
) -> Result<ListPage<R>> {
    filter::validate::<R>(criteria)?;
    let filtered = filter::apply(records, criteria);
    let (rows, pagination) = paginate::slice(filtered, request)?;
    Ok(ListPage { rows, pagination })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Payment, PaymentStatus};
    use crate::test_fixtures::payment_with;

    fn mixed_payments() -> Vec<Payment> {
        let mut records = Vec::new();
        for i in 0..10 {
            records.push(payment_with(
                &format!("pay-a{i}"),
                PaymentStatus::Completed,
                100.0,
            ));
        }
        for i in 0..10 {
            records.push(payment_with(
                &format!("pay-b{i}"),
                PaymentStatus::Pending,
                100.0,
            ));
        }
        for i in 0..5 {
            records.push(payment_with(
                &format!("pay-c{i}"),
                PaymentStatus::Failed,
                100.0,
            ));
        }
        records
    }

    #[test]
    fn filter_then_paginate_end_to_end() {
        let records = mixed_payments();
        let criteria = FilterCriteria::new().with_status("completed");
        let page = run(&records, &criteria, &PageRequest::new(1, 10)).unwrap();

        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.pagination.total_items, 10);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(page.rows.iter().all(|p| p.id().starts_with("pay-a")));
    }

    #[test]
    fn paging_past_the_end_clamps_to_the_last_page() {
        let records = mixed_payments();
        let criteria = FilterCriteria::new().with_status("completed");
        let page = run(&records, &criteria, &PageRequest::new(2, 10)).unwrap();

        // One page of ten matches: the request for page 2 is corrected, the
        // caller re-syncs from the effective page.
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let records = mixed_payments();
        let criteria = FilterCriteria::new()
            .with_status("all")
            .with_search("pay");
        let request = PageRequest::new(2, 7);

        let first = run(&records, &criteria, &request).unwrap();
        let second = run(&records, &criteria, &request).unwrap();
        assert_eq!(first.pagination, second.pagination);
        let ids: Vec<&str> = first.rows.iter().map(|p| p.id()).collect();
        let ids2: Vec<&str> = second.rows.iter().map(|p| p.id()).collect();
        assert_eq!(ids, ids2);
    }
}
