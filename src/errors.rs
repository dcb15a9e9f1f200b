use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the storage and service layers.
#[derive(Error, Debug)]
pub enum CashflowError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CashflowError>;

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        CashflowError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        CashflowError::StorageError(err.to_string())
    }
}
