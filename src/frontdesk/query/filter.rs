use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{FrontdeskError, Result};
use crate::model::Record;

/// Sentinel the UI dropdowns send for "no constraint".
pub const ALL: &str = "all";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The combination of constraints a list screen applies before pagination.
/// Every field is optional; present fields compose with logical AND.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Status label, compared case-insensitively. `all` means no constraint.
    pub status: Option<String>,
    /// Free-text term matched as a case-insensitive substring over the
    /// domain's fixed search fields. Blank terms are ignored.
    pub search_term: Option<String>,
    /// Inclusive day-level range tested against the domain's designated
    /// date field.
    pub date_range: Option<DateRange>,
    /// Domain-specific categorical constraints (`room-type`, `loyalty`, ...).
    pub categories: Vec<(String, String)>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_category(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.categories.push((key.into(), value.into()));
        self
    }
}

/// Inclusive `[start, end]` day range; an absent bound is unbounded on that
/// side. Bounds are normalized to day boundaries (00:00:00 / 23:59:59 UTC)
/// before comparison against timestamp fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parse `YYYY-MM-DD` bounds. Malformed input fails with
    /// [`FrontdeskError::InvalidFilter`].
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self {
            start: start.map(parse_date).transpose()?,
            end: end.map(parse_date).transpose()?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Day-precision containment: equivalent to normalizing the bounds to
    /// 00:00:00 / 23:59:59 UTC and comparing timestamps.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        let day = at.date_naive();
        if let Some(start) = self.start {
            if day < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if day > end {
                return false;
            }
        }
        true
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| FrontdeskError::InvalidFilter(format!("bad date '{}': {}", s, e)))
}

/// Reject criteria using categorical keys the domain does not define.
pub fn validate<R: Record>(criteria: &FilterCriteria) -> Result<()> {
    for (key, _) in &criteria.categories {
        if !R::CATEGORIES.contains(&key.as_str()) {
            return Err(FrontdeskError::InvalidFilter(format!(
                "unknown filter '{}' for {} (expected one of: {})",
                key,
                R::COLLECTION,
                R::CATEGORIES.join(", ")
            )));
        }
    }
    Ok(())
}

/// Apply the criteria to a snapshot, producing a new, order-preserving
/// filtered view. Pure: the input is never mutated.
pub fn apply<R: Record>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    records
        .iter()
        .filter(|r| matches(*r, criteria))
        .cloned()
        .collect()
}

fn matches<R: Record>(record: &R, criteria: &FilterCriteria) -> bool {
    if let Some(status) = &criteria.status {
        if !status.eq_ignore_ascii_case(ALL)
            && !record.status_label().eq_ignore_ascii_case(status)
        {
            return false;
        }
    }

    for (key, value) in &criteria.categories {
        if value.eq_ignore_ascii_case(ALL) {
            continue;
        }
        match record.category(key) {
            Some(actual) if actual.eq_ignore_ascii_case(value) => {}
            _ => return false,
        }
    }

    if let Some(term) = &criteria.search_term {
        let term = term.trim().to_lowercase();
        if !term.is_empty()
            && !record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        {
            return false;
        }
    }

    if let Some(range) = &criteria.date_range {
        if !range.contains(record.filter_date()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Guest, GuestStatus, LoyaltyTier, Payment, PaymentStatus};
    use crate::test_fixtures::{guest_with, payment_at, payment_with};

    fn guests() -> Vec<Guest> {
        vec![
            guest_with("guest-1", "Ana", GuestStatus::Active),
            guest_with("guest-2", "Carlos", GuestStatus::CheckedOut),
        ]
    }

    #[test]
    fn search_term_is_a_case_insensitive_substring_match() {
        let hits = apply(&guests(), &FilterCriteria::new().with_search("an"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ana");
    }

    #[test]
    fn blank_search_term_is_no_constraint() {
        let hits = apply(&guests(), &FilterCriteria::new().with_search("   "));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn status_matches_ignore_casing_and_the_all_sentinel() {
        let records = guests();
        let hits = apply(&records, &FilterCriteria::new().with_status("ACTIVE"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "guest-1");

        let hits = apply(&records, &FilterCriteria::new().with_status("all"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn unknown_status_value_matches_nothing() {
        let hits = apply(&guests(), &FilterCriteria::new().with_status("Hibernating"));
        assert!(hits.is_empty());
    }

    #[test]
    fn criteria_compose_with_and() {
        let mut records = guests();
        records.push(guest_with("guest-3", "Anabel", GuestStatus::CheckedOut));

        let criteria = FilterCriteria::new()
            .with_search("an")
            .with_status("Checked Out");
        let hits = apply(&records, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "guest-3");
    }

    #[test]
    fn category_filters_use_domain_keys() {
        let mut a = guest_with("guest-1", "Ana", GuestStatus::Active);
        a.loyalty_tier = Some(LoyaltyTier::Gold);
        let mut b = guest_with("guest-2", "Carlos", GuestStatus::Active);
        b.loyalty_tier = Some(LoyaltyTier::Standard);

        let criteria = FilterCriteria::new().with_category("loyalty", "gold");
        let hits = apply(&[a, b], &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "guest-1");
    }

    #[test]
    fn unknown_category_key_is_rejected_up_front() {
        let criteria = FilterCriteria::new().with_category("wing", "east");
        let err = validate::<Guest>(&criteria).unwrap_err();
        assert!(matches!(err, FrontdeskError::InvalidFilter(_)));
    }

    #[test]
    fn date_range_bounds_are_inclusive_at_day_precision() {
        let records = vec![
            payment_at("pay-1", "2024-03-01T00:00:00Z"),
            payment_at("pay-2", "2024-03-05T23:30:00Z"),
            payment_at("pay-3", "2024-03-06T00:00:01Z"),
        ];
        let range = DateRange::parse(Some("2024-03-01"), Some("2024-03-05")).unwrap();
        let hits = apply(&records, &FilterCriteria::new().with_date_range(range));
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["pay-1", "pay-2"]);
    }

    #[test]
    fn date_range_missing_bound_is_unbounded() {
        let records = vec![
            payment_at("pay-1", "2024-03-01T12:00:00Z"),
            payment_at("pay-2", "2024-04-01T12:00:00Z"),
        ];
        let range = DateRange::parse(None, Some("2024-03-15")).unwrap();
        let hits = apply(&records, &FilterCriteria::new().with_date_range(range));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "pay-1");
    }

    #[test]
    fn malformed_date_fails_with_invalid_filter() {
        let err = DateRange::parse(Some("03/15/2024"), None).unwrap_err();
        assert!(matches!(err, FrontdeskError::InvalidFilter(_)));
    }

    #[test]
    fn filtering_preserves_record_order() {
        let records: Vec<Payment> = (0..20)
            .map(|i| {
                let status = if i % 2 == 0 {
                    PaymentStatus::Completed
                } else {
                    PaymentStatus::Pending
                };
                payment_with(&format!("pay-{i:02}"), status, 10.0)
            })
            .collect();

        let hits = apply(&records, &FilterCriteria::new().with_status("completed"));
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = guests();
        let criteria = FilterCriteria::new().with_search("a").with_status("all");
        let once = apply(&records, &criteria);
        let twice = apply(&once, &criteria);
        let a: Vec<&str> = once.iter().map(|g| g.id.as_str()).collect();
        let b: Vec<&str> = twice.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(a, b);
    }
}
