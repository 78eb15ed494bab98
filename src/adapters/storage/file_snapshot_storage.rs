//! File-based Snapshot Storage Adapter
//!
//! Stores the stakeholder document as a single JSON file on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::domain::stakeholder::StoreSnapshot;
use crate::ports::{SnapshotStorage, StorageError};

/// File-based storage for the stakeholder document
#[derive(Debug, Clone)]
pub struct FileSnapshotStorage {
    file_path: PathBuf,
}

impl FileSnapshotStorage {
    /// Create a storage backed by the given JSON file
    ///
    /// The file and its parent directories are created on first save.
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SnapshotStorage for FileSnapshotStorage {
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        let json = snapshot
            .to_json()
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        self.ensure_parent_dir().await?;
        fs::write(&self.file_path, json)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        info!(
            path = %self.file_path.display(),
            stakeholders = snapshot.stakeholders.len(),
            relationships = snapshot.relationships.len(),
            "Saved stakeholder data"
        );
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "No saved stakeholder data");
            return Ok(None);
        }

        let json = fs::read_to_string(&self.file_path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        let snapshot = StoreSnapshot::from_json(&json)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        info!(
            path = %self.file_path.display(),
            stakeholders = snapshot.stakeholders.len(),
            "Loaded stakeholder data"
        );
        Ok(Some(snapshot))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)
                .await
                .map_err(|e| StorageError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}
