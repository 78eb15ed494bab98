//! AddStakeholderHandler - Command handler for recording a new stakeholder.

use tracing::info;

use crate::domain::foundation::StakeholderId;
use crate::domain::matrix::Quadrant;
use crate::domain::stakeholder::{
    Stakeholder, StakeholderAttributes, StakeholderError, StakeholderStore,
};

/// Command to add a stakeholder.
#[derive(Debug, Clone)]
pub struct AddStakeholderCommand {
    pub attributes: StakeholderAttributes,
    /// Existing stakeholders the new one is related to.
    pub related_ids: Vec<StakeholderId>,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddStakeholderResult {
    pub stakeholder: Stakeholder,
    pub quadrant: Quadrant,
    /// Relationships actually created (unknown related ids are skipped).
    pub relationship_count: usize,
}

/// Handler for adding stakeholders.
#[derive(Debug, Default)]
pub struct AddStakeholderHandler;

impl AddStakeholderHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut StakeholderStore,
        cmd: AddStakeholderCommand,
    ) -> Result<AddStakeholderResult, StakeholderError> {
        let stakeholder = store.add(cmd.attributes, &cmd.related_ids)?;
        let relationship_count = store.related_ids_of(stakeholder.id()).len();
        let quadrant = stakeholder.quadrant();

        info!(
            stakeholder_id = %stakeholder.id(),
            name = stakeholder.name(),
            quadrant = %quadrant,
            "Added stakeholder"
        );

        Ok(AddStakeholderResult {
            stakeholder,
            quadrant,
            relationship_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Influence, Level, StakeholderRole};

    fn command(name: &str, related_ids: Vec<StakeholderId>) -> AddStakeholderCommand {
        AddStakeholderCommand {
            attributes: StakeholderAttributes::new(
                name,
                StakeholderRole::Customer,
                Level::High,
                Level::High,
                Influence::Direct,
            ),
            related_ids,
        }
    }

    #[test]
    fn adds_and_classifies() {
        let mut store = StakeholderStore::new();
        let result = AddStakeholderHandler::new()
            .handle(&mut store, command("Acme", vec![]))
            .unwrap();

        assert_eq!(result.quadrant, Quadrant::ManageClosely);
        assert_eq!(result.relationship_count, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn counts_created_relationships() {
        let mut store = StakeholderStore::new();
        let handler = AddStakeholderHandler::new();
        let first = handler.handle(&mut store, command("A", vec![])).unwrap();

        let second = handler
            .handle(
                &mut store,
                command("B", vec![first.stakeholder.id().clone(), "ghost".parse().unwrap()]),
            )
            .unwrap();

        assert_eq!(second.relationship_count, 1);
    }

    #[test]
    fn rejects_blank_name() {
        let mut store = StakeholderStore::new();
        let result = AddStakeholderHandler::new().handle(&mut store, command(" ", vec![]));

        assert!(matches!(result, Err(StakeholderError::ValidationFailed { .. })));
        assert!(store.is_empty());
    }
}
