//! In-Memory Snapshot Storage Adapter
//!
//! Keeps the serialized document in memory, the way a browser keeps it under
//! a single local-storage key. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::stakeholder::StoreSnapshot;
use crate::ports::{SnapshotStorage, StorageError};

/// In-memory storage for the stakeholder document
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStorage {
    document: Arc<RwLock<Option<String>>>,
}

impl InMemorySnapshotStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-filled with a raw document (may be malformed)
    pub fn with_raw(document: impl Into<String>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document.into()))),
        }
    }

    /// Returns the raw stored document
    pub async fn raw(&self) -> Option<String> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl SnapshotStorage for InMemorySnapshotStorage {
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        *self.document.write().await = Some(json);
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        let document = self.document.read().await;
        match document.as_deref() {
            None => Ok(None),
            Some(json) => StoreSnapshot::from_json(json)
                .map(Some)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string())),
        }
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.document.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_starts_empty() {
        let storage = InMemorySnapshotStorage::new();
        assert_eq!(storage.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_in_memory_save_and_load() {
        let storage = InMemorySnapshotStorage::new();
        let snapshot = StoreSnapshot::default();

        storage.save(&snapshot).await.unwrap();

        assert_eq!(storage.load().await.unwrap(), Some(snapshot));
        assert_eq!(
            storage.raw().await.as_deref(),
            Some(r#"{"stakeholders":[],"relationships":[]}"#)
        );
    }

    #[tokio::test]
    async fn test_in_memory_malformed_document() {
        let storage = InMemorySnapshotStorage::with_raw("[1, 2");
        let result = storage.load().await;
        assert!(matches!(result, Err(StorageError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn test_in_memory_clones_share_state() {
        let storage = InMemorySnapshotStorage::new();
        let other = storage.clone();

        storage.save(&StoreSnapshot::default()).await.unwrap();
        other.clear().await.unwrap();

        assert_eq!(storage.load().await.unwrap(), None);
    }
}
