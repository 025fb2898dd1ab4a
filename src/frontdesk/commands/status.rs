use chrono::Utc;

use crate::error::{FrontdeskError, Result};
use crate::model::Record;
use crate::store::DataStore;

/// Change a record's status. The new value is parsed case-insensitively
/// against the domain's enumeration, `updated_at` is touched, and the
/// collection is written back whole so the next pipeline run sees the
/// change.
pub fn run<R: Record, S: DataStore>(store: &mut S, id: &str, status: &str) -> Result<R> {
    let status: R::Status = status.parse()?;

    let mut records = store.load::<R>()?;
    let record = records
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| FrontdeskError::RecordNotFound(id.to_string()))?;

    record.set_status(status, Utc::now());
    let updated = record.clone();
    store.replace(&records)?;
    Ok(updated)
}
