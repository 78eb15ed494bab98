//! Relationship value object - an undirected link between two stakeholders.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StakeholderId;

/// A connection between two stakeholders.
///
/// Stored as `(source, target)` in creation order but compared as an
/// unordered pair by [`Relationship::same_pair`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub source: StakeholderId,
    pub target: StakeholderId,
}

impl Relationship {
    pub fn new(source: StakeholderId, target: StakeholderId) -> Self {
        Self { source, target }
    }

    /// Returns true if either endpoint is `id`.
    pub fn involves(&self, id: &StakeholderId) -> bool {
        self.source == *id || self.target == *id
    }

    /// Returns the endpoint opposite `id`, if `id` is an endpoint.
    ///
    /// A self-relationship yields `id` itself.
    pub fn other_end(&self, id: &StakeholderId) -> Option<&StakeholderId> {
        if self.source == *id {
            Some(&self.target)
        } else if self.target == *id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Returns true if both relationships join the same two stakeholders,
    /// ignoring direction.
    pub fn same_pair(&self, other: &Relationship) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }

    /// Returns true if both endpoints are the same stakeholder.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
