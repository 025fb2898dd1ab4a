use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FrontdeskError, Result};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_CURRENCY: &str = "USD";

/// Console configuration, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrontdeskConfig {
    /// Rows per page for list screens.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// ISO currency code used when rendering amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for FrontdeskConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl FrontdeskConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FrontdeskError::Io)?;
        let config = serde_json::from_str(&content).map_err(FrontdeskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FrontdeskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FrontdeskError::Serialization)?;
        fs::write(config_path, content).map_err(FrontdeskError::Io)?;
        Ok(())
    }

    /// Set the page size; zero is rejected so the pipeline never sees an
    /// invalid default.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(FrontdeskError::InvalidPagination(
                "page size must be a positive integer".to_string(),
            ));
        }
        self.page_size = size;
        Ok(())
    }

    pub fn set_currency(&mut self, code: &str) {
        self.currency = code.trim().to_uppercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let config = FrontdeskConfig::load(dir.path()).unwrap();
        assert_eq!(config, FrontdeskConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FrontdeskConfig::default();
        config.set_page_size(25).unwrap();
        config.set_currency("eur");
        config.save(dir.path()).unwrap();

        let loaded = FrontdeskConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.currency, "EUR");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = FrontdeskConfig::default();
        assert!(config.set_page_size(0).is_err());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: FrontdeskConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FrontdeskConfig::default());
    }
}
