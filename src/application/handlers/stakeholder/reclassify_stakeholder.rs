//! ReclassifyStakeholderHandler - Command handler for a matrix drag-and-drop.
//!
//! The drop position is kept inside the container margin, then mapped to
//! power (horizontal) and interest (vertical).

use tracing::info;

use crate::domain::foundation::StakeholderId;
use crate::domain::matrix::{clamp_to_bounds, Bounds, Position, Quadrant};
use crate::domain::stakeholder::StakeholderStore;

/// Command describing where a node was dropped.
#[derive(Debug, Clone)]
pub struct ReclassifyStakeholderCommand {
    pub stakeholder_id: StakeholderId,
    pub position: Position,
    pub bounds: Bounds,
}

/// Result of a drop.
#[derive(Debug, Clone, PartialEq)]
pub struct ReclassifyStakeholderResult {
    /// Where the node settles after clamping.
    pub position: Position,
    /// New quadrant, `None` if the stakeholder no longer exists.
    pub quadrant: Option<Quadrant>,
}

/// Handler for reclassifying stakeholders by position.
#[derive(Debug, Default)]
pub struct ReclassifyStakeholderHandler;

impl ReclassifyStakeholderHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut StakeholderStore,
        cmd: ReclassifyStakeholderCommand,
    ) -> ReclassifyStakeholderResult {
        let position = clamp_to_bounds(cmd.position, cmd.bounds);
        let quadrant = store.reclassify_by_position(&cmd.stakeholder_id, position, cmd.bounds);

        if let Some(quadrant) = quadrant {
            info!(
                stakeholder_id = %cmd.stakeholder_id,
                quadrant = %quadrant,
                "Stakeholder moved on matrix"
            );
        }

        ReclassifyStakeholderResult { position, quadrant }
    }
}
