//! LoadDataHandler - Command handler for restoring the stakeholder store.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::stakeholder::StakeholderStore;
use crate::ports::{SnapshotStorage, StorageError};

/// Outcome of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDataResult {
    /// Nothing has been saved yet. The store was left as it was.
    NoSavedData,
    /// The store was replaced with the saved document.
    Loaded {
        stakeholder_count: usize,
        relationship_count: usize,
    },
}

/// Handler that replaces the store with the saved document.
pub struct LoadDataHandler {
    storage: Arc<dyn SnapshotStorage>,
}

impl LoadDataHandler {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { storage }
    }

    /// Loads into `store`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document is unreadable or breaks a store
    /// invariant (blank id or name, duplicate id). The store is not modified
    /// in that case.
    pub async fn handle(&self, store: &mut StakeholderStore) -> Result<LoadDataResult, StorageError> {
        let snapshot = match self.storage.load().await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                info!("No saved data found");
                return Ok(LoadDataResult::NoSavedData);
            }
            Err(err) => {
                warn!(error = %err, "Error loading data");
                return Err(err);
            }
        };

        let loaded = StakeholderStore::from_snapshot(snapshot).map_err(|err| {
            warn!(error = %err, "Saved data failed validation");
            StorageError::DeserializationFailed(err.to_string())
        })?;
        *store = loaded;

        let stakeholder_count = store.len();
        let relationship_count = store.all_relationships().len();
        info!(
            stakeholders = stakeholder_count,
            relationships = relationship_count,
            "Data loaded successfully"
        );

        Ok(LoadDataResult::Loaded {
            stakeholder_count,
            relationship_count,
        })
    }
}
