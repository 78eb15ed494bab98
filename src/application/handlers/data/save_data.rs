//! SaveDataHandler - Command handler for persisting the stakeholder store.

use std::sync::Arc;

use tracing::info;

use crate::domain::stakeholder::StakeholderStore;
use crate::ports::{SnapshotStorage, StorageError};

/// Result of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDataResult {
    pub stakeholder_count: usize,
    pub relationship_count: usize,
}

/// Handler that writes the whole store as one document.
pub struct SaveDataHandler {
    storage: Arc<dyn SnapshotStorage>,
}

impl SaveDataHandler {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, store: &StakeholderStore) -> Result<SaveDataResult, StorageError> {
        // Copy first so the document reflects the store at call time.
        let snapshot = store.snapshot();
        let result = SaveDataResult {
            stakeholder_count: snapshot.stakeholders.len(),
            relationship_count: snapshot.relationships.len(),
        };

        self.storage.save(&snapshot).await?;

        info!(
            stakeholders = result.stakeholder_count,
            relationships = result.relationship_count,
            "Data saved successfully"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySnapshotStorage;
    use crate::domain::foundation::{Influence, Level, StakeholderRole};
    use crate::domain::stakeholder::StakeholderAttributes;

    #[tokio::test]
    async fn saves_current_contents() {
        let storage = Arc::new(InMemorySnapshotStorage::new());
        let handler = SaveDataHandler::new(storage.clone());

        let mut store = StakeholderStore::new();
        let a = store
            .add(
                StakeholderAttributes::new(
                    "A",
                    StakeholderRole::External,
                    Level::High,
                    Level::Low,
                    Influence::Direct,
                ),
                &[],
            )
            .unwrap();
        store
            .add(
                StakeholderAttributes::new(
                    "B",
                    StakeholderRole::Supplier,
                    Level::Low,
                    Level::High,
                    Influence::Indirect,
                ),
                &[a.id().clone()],
            )
            .unwrap();

        let result = handler.handle(&store).await.unwrap();

        assert_eq!(result.stakeholder_count, 2);
        assert_eq!(result.relationship_count, 1);
        assert_eq!(storage.load().await.unwrap(), Some(store.snapshot()));
    }

    #[tokio::test]
    async fn saving_empty_store_writes_empty_document() {
        let storage = Arc::new(InMemorySnapshotStorage::new());
        let handler = SaveDataHandler::new(storage.clone());

        handler.handle(&StakeholderStore::new()).await.unwrap();

        let saved = storage.load().await.unwrap().unwrap();
        assert!(saved.is_empty());
    }
}
