use crate::error::{FrontdeskError, Result};
use crate::model::Record;
use crate::store::DataStore;

/// Fetch a single record by id.
pub fn run<R: Record, S: DataStore>(store: &S, id: &str) -> Result<R> {
    let records = store.load::<R>()?;
    records
        .into_iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| FrontdeskError::RecordNotFound(id.to_string()))
}
