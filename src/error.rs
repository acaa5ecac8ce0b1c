//! Error types for the record store.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage collaborator failure, passed through as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("File already exists")]
    AlreadyExists(PathBuf),

    #[error("No items found")]
    NoItemsFound,

    /// Caller-supplied error for an update that matched nothing.
    #[error("{0}")]
    NoMatch(String),

    #[error("Store not initialized: {}", .0.display())]
    NotInitialized(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl StoreError {
    /// Build a custom no-match error for [`JsonStore::update`](crate::JsonStore::update).
    pub fn no_match(message: impl Into<String>) -> Self {
        StoreError::NoMatch(message.into())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
