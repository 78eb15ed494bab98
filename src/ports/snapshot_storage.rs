//! Snapshot Storage Port - Interface for persisting the stakeholder store.
//!
//! One document per storage location, holding both stakeholders and
//! relationships.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::stakeholder::StoreSnapshot;

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize stakeholder data: {0}")]
    SerializationFailed(String),

    #[error("Failed to parse saved stakeholder data: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::PersistenceFailed, err.to_string())
    }
}

/// Port for saving and loading the stakeholder document
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Save the document, replacing any previous one
    ///
    /// # Errors
    /// Returns `StorageError` if serialization or the write fails
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError>;

    /// Load the saved document
    ///
    /// # Returns
    /// `None` when nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StorageError::DeserializationFailed` for malformed documents
    async fn load(&self) -> Result<Option<StoreSnapshot>, StorageError>;

    /// Delete the saved document, if any
    async fn clear(&self) -> Result<(), StorageError>;
}
