use std::fs;
use std::path::{Path, PathBuf};

use super::DataStore;
use crate::error::{FrontdeskError, Result};
use crate::model::Record;

/// File-backed storage: one JSON array per collection under a data
/// directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a collection file, e.g. `<root>/reservations.json`.
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FrontdeskError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load<R: Record>(&self) -> Result<Vec<R>> {
        let path = self.collection_path(R::COLLECTION);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(FrontdeskError::Io)?;
        let records = serde_json::from_str(&content).map_err(FrontdeskError::Serialization)?;
        Ok(records)
    }

    fn replace<R: Record>(&mut self, records: &[R]) -> Result<()> {
        self.ensure_root()?;
        let path = self.collection_path(R::COLLECTION);
        let content = serde_json::to_string_pretty(records).map_err(FrontdeskError::Serialization)?;
        fs::write(path, content).map_err(FrontdeskError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Payment, PaymentStatus, Reservation};
    use crate::test_fixtures::payment_with;

    #[test]
    fn missing_collection_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        let reservations: Vec<Reservation> = store.load().unwrap();
        assert!(reservations.is_empty());
    }

    #[test]
    fn replace_writes_one_json_file_per_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        let records = vec![
            payment_with("pay-1", PaymentStatus::Completed, 10.0),
            payment_with("pay-2", PaymentStatus::Pending, 20.0),
        ];
        store.replace(&records).unwrap();

        let path = store.collection_path("payments");
        assert!(path.exists());
        let raw = fs::read_to_string(path).unwrap();
        assert!(raw.contains("\"paymentStatus\": \"completed\""));

        let loaded: Vec<Payment> = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "pay-1");
    }

    #[test]
    fn corrupt_collection_file_surfaces_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("payments.json"), "not json").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        let err = store.load::<Payment>().unwrap_err();
        assert!(matches!(err, FrontdeskError::Serialization(_)));
    }
}
