//! ClearDataHandler - Command handler for starting over.

use std::sync::Arc;

use tracing::info;

use crate::domain::stakeholder::StakeholderStore;
use crate::ports::{SnapshotStorage, StorageError};

/// Command to clear data.
#[derive(Debug, Clone, Default)]
pub struct ClearDataCommand {
    /// Also delete the saved document. Otherwise only the store is emptied.
    pub include_saved: bool,
}

/// Result of a clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearDataResult {
    pub stakeholders_removed: usize,
    pub saved_data_cleared: bool,
}

/// Handler for clearing the store.
pub struct ClearDataHandler {
    storage: Arc<dyn SnapshotStorage>,
}

impl ClearDataHandler {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        store: &mut StakeholderStore,
        cmd: ClearDataCommand,
    ) -> Result<ClearDataResult, StorageError> {
        if cmd.include_saved {
            self.storage.clear().await?;
        }

        let stakeholders_removed = store.len();
        store.clear();

        info!(
            stakeholders_removed,
            saved_data_cleared = cmd.include_saved,
            "Data cleared"
        );

        Ok(ClearDataResult {
            stakeholders_removed,
            saved_data_cleared: cmd.include_saved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySnapshotStorage;
    use crate::domain::foundation::{Influence, Level, StakeholderRole};
    use crate::domain::stakeholder::StakeholderAttributes;

    fn seeded_store() -> StakeholderStore {
        let mut store = StakeholderStore::new();
        store
            .add(
                StakeholderAttributes::new(
                    "A",
                    StakeholderRole::Community,
                    Level::Low,
                    Level::High,
                    Influence::Indirect,
                ),
                &[],
            )
            .unwrap();
        store
    }

    #[tokio::test]
    async fn clears_store_only_by_default() {
        let storage = Arc::new(InMemorySnapshotStorage::new());
        let mut store = seeded_store();
        storage.save(&store.snapshot()).await.unwrap();

        let result = ClearDataHandler::new(storage.clone())
            .handle(&mut store, ClearDataCommand::default())
            .await
            .unwrap();

        assert_eq!(result.stakeholders_removed, 1);
        assert!(!result.saved_data_cleared);
        assert!(store.is_empty());
        assert!(store.all_relationships().is_empty());
        assert!(storage.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn clears_saved_document_when_asked() {
        let storage = Arc::new(InMemorySnapshotStorage::new());
        let mut store = seeded_store();
        storage.save(&store.snapshot()).await.unwrap();

        ClearDataHandler::new(storage.clone())
            .handle(&mut store, ClearDataCommand { include_saved: true })
            .await
            .unwrap();

        assert!(storage.load().await.unwrap().is_none());
    }
}
