//! EditStakeholderHandler - Command handler for editing a stakeholder.
//!
//! Editing removes the stakeholder and adds it again, so the edited
//! stakeholder comes back with a new id.

use tracing::info;

use crate::domain::foundation::StakeholderId;
use crate::domain::stakeholder::{
    Stakeholder, StakeholderAttributes, StakeholderError, StakeholderStore,
};

/// Command to edit a stakeholder.
#[derive(Debug, Clone)]
pub struct EditStakeholderCommand {
    pub stakeholder_id: StakeholderId,
    pub attributes: StakeholderAttributes,
    /// New relations. `None` keeps the stakeholder's current relations.
    pub related_ids: Option<Vec<StakeholderId>>,
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct EditStakeholderResult {
    /// Id before the edit.
    pub previous_id: StakeholderId,
    /// Whether a stakeholder with `previous_id` existed.
    pub replaced: bool,
    /// The edited stakeholder, under its new id.
    pub stakeholder: Stakeholder,
}

/// Handler for editing stakeholders.
#[derive(Debug, Default)]
pub struct EditStakeholderHandler;

impl EditStakeholderHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut StakeholderStore,
        cmd: EditStakeholderCommand,
    ) -> Result<EditStakeholderResult, StakeholderError> {
        let replaced = store.contains(&cmd.stakeholder_id);
        let related_ids = cmd
            .related_ids
            .unwrap_or_else(|| store.related_ids_of(&cmd.stakeholder_id));

        let stakeholder = store.replace(&cmd.stakeholder_id, cmd.attributes, &related_ids)?;

        info!(
            previous_id = %cmd.stakeholder_id,
            stakeholder_id = %stakeholder.id(),
            replaced,
            "Edited stakeholder"
        );

        Ok(EditStakeholderResult {
            previous_id: cmd.stakeholder_id,
            replaced,
            stakeholder,
        })
    }
}
