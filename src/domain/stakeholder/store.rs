//! StakeholderStore - the authoritative collection of stakeholders and relationships.
//!
//! All mutators are synchronous and either fully apply or fully reject
//! before touching state. Absent ids are silent no-ops, never errors.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::foundation::{Level, StakeholderId};
use crate::domain::matrix::{level_at, Bounds, Position, Quadrant};

use super::{Relationship, Stakeholder, StakeholderAttributes, StakeholderError, StoreSnapshot};

/// Owned, insertion-ordered store.
///
/// # Invariants
///
/// - stakeholder ids are unique
/// - every relationship created by a mutator references two present stakeholders
/// - removing a stakeholder removes every relationship touching it
/// - mutators never create two relationships for the same unordered pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StakeholderStore {
    stakeholders: Vec<Stakeholder>,
    relationships: Vec<Relationship>,
}

impl StakeholderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a saved document.
    ///
    /// Relationships whose endpoints are not in the document are dropped.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if two stakeholders in the document share an id
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self, StakeholderError> {
        let StoreSnapshot {
            stakeholders,
            relationships,
        } = snapshot;

        let mut known: HashSet<&StakeholderId> = HashSet::with_capacity(stakeholders.len());
        for stakeholder in &stakeholders {
            if !known.insert(stakeholder.id()) {
                return Err(StakeholderError::DuplicateId(stakeholder.id().clone()));
            }
        }
        let before = relationships.len();
        let relationships: Vec<Relationship> = relationships
            .into_iter()
            .filter(|r| known.contains(&r.source) && known.contains(&r.target))
            .collect();

        if relationships.len() < before {
            warn!(
                dropped = before - relationships.len(),
                "Dropped relationships referencing unknown stakeholders"
            );
        }

        Ok(Self {
            stakeholders,
            relationships,
        })
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::new(self.stakeholders.clone(), self.relationships.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// All stakeholders in insertion order.
    pub fn all(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    /// All relationships in insertion order.
    pub fn all_relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn get(&self, id: &StakeholderId) -> Option<&Stakeholder> {
        self.stakeholders.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: &StakeholderId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.stakeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stakeholders.is_empty()
    }

    /// Ids connected to `id` through any relationship, in either direction.
    pub fn relations_of(&self, id: &StakeholderId) -> HashSet<StakeholderId> {
        self.relationships
            .iter()
            .filter_map(|r| r.other_end(id))
            .cloned()
            .collect()
    }

    /// Same as [`relations_of`](Self::relations_of) but in relationship order,
    /// without duplicates.
    pub fn related_ids_of(&self, id: &StakeholderId) -> Vec<StakeholderId> {
        let mut seen = HashSet::new();
        self.relationships
            .iter()
            .filter_map(|r| r.other_end(id))
            .filter(|other| seen.insert((*other).clone()))
            .cloned()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a stakeholder with a fresh id and links it to `related_ids`.
    ///
    /// Related ids that do not name a present stakeholder are skipped, and
    /// repeated ids produce a single relationship.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank; the store is unchanged
    pub fn add(
        &mut self,
        attributes: StakeholderAttributes,
        related_ids: &[StakeholderId],
    ) -> Result<Stakeholder, StakeholderError> {
        let stakeholder = Stakeholder::new(self.fresh_id(), attributes)?;
        let new_id = stakeholder.id().clone();

        let mut linked: Vec<Relationship> = Vec::with_capacity(related_ids.len());
        for related in related_ids {
            if !self.contains(related) {
                debug!(related_id = %related, "Skipping relation to unknown stakeholder");
                continue;
            }
            let rel = Relationship::new(new_id.clone(), related.clone());
            if !linked.iter().any(|existing| existing.same_pair(&rel)) {
                linked.push(rel);
            }
        }

        debug!(
            stakeholder_id = %new_id,
            relations = linked.len(),
            "Added stakeholder"
        );

        self.stakeholders.push(stakeholder.clone());
        self.relationships.extend(linked);
        Ok(stakeholder)
    }

    /// Removes a stakeholder and every relationship touching it.
    ///
    /// Returns the removed stakeholder, or `None` if `id` was absent.
    pub fn remove(&mut self, id: &StakeholderId) -> Option<Stakeholder> {
        let position = self.stakeholders.iter().position(|s| s.id() == id)?;
        let removed = self.stakeholders.remove(position);
        self.relationships.retain(|r| !r.involves(id));

        debug!(stakeholder_id = %id, "Removed stakeholder");
        Some(removed)
    }

    /// Edits a stakeholder by removing it and adding it again.
    ///
    /// The returned stakeholder has a **new id**. Attributes are validated
    /// before anything is removed, so a failed replace leaves the store as
    /// it was. Replacing an absent id behaves like [`add`](Self::add).
    pub fn replace(
        &mut self,
        id: &StakeholderId,
        attributes: StakeholderAttributes,
        related_ids: &[StakeholderId],
    ) -> Result<Stakeholder, StakeholderError> {
        attributes.validate()?;
        self.remove(id);
        let replacement = self.add(attributes, related_ids)?;

        debug!(old_id = %id, new_id = %replacement.id(), "Replaced stakeholder");
        Ok(replacement)
    }

    /// Sets power and interest directly.
    ///
    /// Returns the new quadrant, or `None` if `id` is absent.
    pub fn set_levels(&mut self, id: &StakeholderId, power: Level, interest: Level) -> Option<Quadrant> {
        let stakeholder = self.stakeholders.iter_mut().find(|s| s.id() == id)?;
        stakeholder.set_levels(power, interest);
        Some(stakeholder.quadrant())
    }

    /// Reclassifies a stakeholder from where it was dropped on the matrix.
    ///
    /// Each axis becomes `High` at or past its midpoint. Returns the new
    /// quadrant, or `None` if `id` is absent.
    pub fn reclassify_by_position(
        &mut self,
        id: &StakeholderId,
        position: Position,
        bounds: Bounds,
    ) -> Option<Quadrant> {
        let power = level_at(position.x, bounds.width);
        let interest = level_at(position.y, bounds.height);

        let quadrant = self.set_levels(id, power, interest)?;
        debug!(stakeholder_id = %id, quadrant = %quadrant, "Reclassified stakeholder by position");
        Some(quadrant)
    }

    /// Removes every stakeholder and relationship.
    pub fn clear(&mut self) {
        self.stakeholders.clear();
        self.relationships.clear();
    }

    fn fresh_id(&self) -> StakeholderId {
        loop {
            let id = StakeholderId::new();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
