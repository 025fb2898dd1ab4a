use crate::error::{FrontdeskError, Result};
use crate::model::Record;
use crate::store::DataStore;

/// Remove a record permanently and write the collection back.
pub fn run<R: Record, S: DataStore>(store: &mut S, id: &str) -> Result<()> {
    let mut records = store.load::<R>()?;
    let before = records.len();
    records.retain(|r| r.id() != id);
    if records.len() == before {
        return Err(FrontdeskError::RecordNotFound(id.to_string()));
    }
    store.replace(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::model::Payment;
    use crate::query::{FilterCriteria, PageRequest};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deleted_records_disappear_from_the_next_listing() {
        let mut fixture = StoreFixture::new().with_payments(4);
        run::<Payment, _>(&mut fixture.store, "pay-2").unwrap();

        let page = list::run::<Payment, _>(
            &fixture.store,
            &FilterCriteria::new(),
            &PageRequest::default(),
        )
        .unwrap();
        assert_eq!(page.pagination.total_items, 3);
        assert!(page.rows.iter().all(|p| p.id != "pay-2"));
    }

    #[test]
    fn deleting_a_missing_record_is_an_error() {
        let mut fixture = StoreFixture::new().with_payments(1);
        let err = run::<Payment, _>(&mut fixture.store, "pay-7").unwrap_err();
        assert!(matches!(err, FrontdeskError::RecordNotFound(_)));
    }
}
