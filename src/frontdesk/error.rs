use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontdeskError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Invalid status '{value}' (expected one of: {expected})")]
    InvalidStatus { value: String, expected: String },

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FrontdeskError>;
