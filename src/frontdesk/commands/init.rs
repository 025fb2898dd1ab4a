use std::fs;
use std::path::Path;

use crate::config::FrontdeskConfig;
use crate::error::{FrontdeskError, Result};

/// Prepare a data directory: create it and write a default config when
/// none exists. Idempotent.
pub fn run(data_dir: &Path) -> Result<bool> {
    let created = if data_dir.exists() {
        false
    } else {
        fs::create_dir_all(data_dir).map_err(FrontdeskError::Io)?;
        true
    };

    if !data_dir.join("config.json").exists() {
        FrontdeskConfig::default().save(data_dir)?;
    }
    Ok(created)
}
