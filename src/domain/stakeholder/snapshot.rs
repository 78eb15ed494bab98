//! Persisted document shape for a stakeholder store.

use serde::{Deserialize, Serialize};

use super::{Relationship, Stakeholder};

/// Read-only copy of a store's contents.
///
/// Serializes to `{ "stakeholders": [...], "relationships": [...] }`. Either
/// array may be missing from a saved document and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub stakeholders: Vec<Stakeholder>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl StoreSnapshot {
    pub fn new(stakeholders: Vec<Stakeholder>, relationships: Vec<Relationship>) -> Self {
        Self {
            stakeholders,
            relationships,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stakeholders.is_empty() && self.relationships.is_empty()
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Renders the document as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
