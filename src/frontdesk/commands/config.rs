use std::path::Path;

use crate::config::FrontdeskConfig;
use crate::error::{FrontdeskError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set { key: String, value: String },
}

/// Read or update the persisted configuration. Returns the effective
/// config after the action.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<FrontdeskConfig> {
    let mut config = FrontdeskConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(config),
        ConfigAction::ShowKey(key) => {
            validate_key(&key)?;
            Ok(config)
        }
        ConfigAction::Set { key, value } => {
            match key.as_str() {
                "page-size" => {
                    let size = value.parse::<usize>().map_err(|_| {
                        FrontdeskError::Api(format!("page-size must be a number, got '{value}'"))
                    })?;
                    config.set_page_size(size)?;
                }
                "currency" => config.set_currency(&value),
                other => return Err(unknown_key(other)),
            }
            config.save(config_dir)?;
            Ok(config)
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    match key {
        "page-size" | "currency" => Ok(()),
        other => Err(unknown_key(other)),
    }
}

fn unknown_key(key: &str) -> FrontdeskError {
    FrontdeskError::Api(format!(
        "Unknown config key '{key}' (expected page-size or currency)"
    ))
}
