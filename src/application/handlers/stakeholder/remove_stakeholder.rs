//! RemoveStakeholderHandler - Command handler for deleting a stakeholder.

use tracing::info;

use crate::domain::foundation::StakeholderId;
use crate::domain::stakeholder::{Stakeholder, StakeholderStore};

/// Command to remove a stakeholder.
#[derive(Debug, Clone)]
pub struct RemoveStakeholderCommand {
    pub stakeholder_id: StakeholderId,
}

/// Result of a remove. Removing an unknown id is not an error.
#[derive(Debug, Clone)]
pub struct RemoveStakeholderResult {
    pub removed: Option<Stakeholder>,
    /// Relationships deleted along with the stakeholder.
    pub relationships_removed: usize,
}

/// Handler for removing stakeholders.
#[derive(Debug, Default)]
pub struct RemoveStakeholderHandler;

impl RemoveStakeholderHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut StakeholderStore,
        cmd: RemoveStakeholderCommand,
    ) -> RemoveStakeholderResult {
        let before = store.all_relationships().len();
        let removed = store.remove(&cmd.stakeholder_id);
        let relationships_removed = before - store.all_relationships().len();

        if let Some(stakeholder) = &removed {
            info!(
                stakeholder_id = %cmd.stakeholder_id,
                name = stakeholder.name(),
                relationships_removed,
                "Removed stakeholder"
            );
        }

        RemoveStakeholderResult {
            removed,
            relationships_removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Influence, Level, StakeholderRole};
    use crate::domain::stakeholder::StakeholderAttributes;

    fn attrs(name: &str) -> StakeholderAttributes {
        StakeholderAttributes::new(
            name,
            StakeholderRole::Other,
            Level::Low,
            Level::Low,
            Influence::Direct,
        )
    }

    #[test]
    fn removes_stakeholder_and_relationships() {
        let mut store = StakeholderStore::new();
        let a = store.add(attrs("A"), &[]).unwrap();
        let b = store.add(attrs("B"), &[a.id().clone()]).unwrap();
        store.add(attrs("C"), &[a.id().clone(), b.id().clone()]).unwrap();

        let result = RemoveStakeholderHandler::new().handle(
            &mut store,
            RemoveStakeholderCommand {
                stakeholder_id: a.id().clone(),
            },
        );

        assert_eq!(result.removed.map(|s| s.name().to_string()), Some("A".to_string()));
        assert_eq!(result.relationships_removed, 2);
        assert_eq!(store.all_relationships().len(), 1);
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut store = StakeholderStore::new();
        store.add(attrs("A"), &[]).unwrap();

        let result = RemoveStakeholderHandler::new().handle(
            &mut store,
            RemoveStakeholderCommand {
                stakeholder_id: "missing".parse().unwrap(),
            },
        );

        assert!(result.removed.is_none());
        assert_eq!(result.relationships_removed, 0);
        assert_eq!(store.len(), 1);
    }
}
