use crate::error::Result;
use crate::model::Record;
use crate::query::{self, FilterCriteria, ListPage, PageRequest};
use crate::store::DataStore;

/// List a domain: snapshot the collection, then run the filter/paginate
/// pipeline over the copy.
pub fn run<R: Record, S: DataStore>(
    store: &S,
    criteria: &FilterCriteria,
    request: &PageRequest,
) -> Result<ListPage<R>> {
    let records = store.load::<R>()?;
    query::run(&records, criteria, request)
}
