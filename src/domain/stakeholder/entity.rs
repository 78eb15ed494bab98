//! Stakeholder entity and the attribute set used to create one.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Influence, Level, StakeholderId, StakeholderRole, ValidationError};
use crate::domain::matrix::{classify, Quadrant};

/// Raw attributes supplied by a form or command line.
///
/// Validated by [`StakeholderAttributes::validate`] before a stakeholder is
/// built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderAttributes {
    pub name: String,
    pub role: StakeholderRole,
    pub power: Level,
    pub interest: Level,
    pub influence: Influence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StakeholderAttributes {
    /// Creates attributes without notes.
    pub fn new(
        name: impl Into<String>,
        role: StakeholderRole,
        power: Level,
        interest: Level,
        influence: Influence,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            power,
            interest,
            influence,
            notes: None,
        }
    }

    /// Attaches free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Checks that the name is non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }
}

/// A person or organisation with a stake in the project.
///
/// # Invariants
///
/// - `id` is assigned once and never changes
/// - `name` is non-empty and trimmed
/// - `notes`, when present, is non-empty and trimmed
///
/// Deserialization runs [`Stakeholder::new`], so saved documents are held to
/// the same invariants as freshly added stakeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredStakeholder")]
pub struct Stakeholder {
    id: StakeholderId,
    name: String,
    role: StakeholderRole,
    power: Level,
    interest: Level,
    influence: Influence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Stakeholder {
    /// Builds a stakeholder from validated attributes.
    ///
    /// # Errors
    ///
    /// - `EmptyField("name")` if the name is blank
    pub fn new(id: StakeholderId, attributes: StakeholderAttributes) -> Result<Self, ValidationError> {
        attributes.validate()?;

        let notes = attributes
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            id,
            name: attributes.name.trim().to_string(),
            role: attributes.role,
            power: attributes.power,
            interest: attributes.interest,
            influence: attributes.influence,
            notes,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &StakeholderId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> StakeholderRole {
        self.role
    }

    pub fn power(&self) -> Level {
        self.power
    }

    pub fn interest(&self) -> Level {
        self.interest
    }

    pub fn influence(&self) -> Influence {
        self.influence
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the quadrant this stakeholder currently falls into.
    pub fn quadrant(&self) -> Quadrant {
        classify(self.power, self.interest)
    }

    /// Returns the attributes this stakeholder was built from.
    ///
    /// Used to pre-fill an edit form.
    pub fn attributes(&self) -> StakeholderAttributes {
        StakeholderAttributes {
            name: self.name.clone(),
            role: self.role,
            power: self.power,
            interest: self.interest,
            influence: self.influence,
            notes: self.notes.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (store only)
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn set_levels(&mut self, power: Level, interest: Level) {
        self.power = power;
        self.interest = interest;
    }
}

/// Wire shape of a stakeholder before validation.
#[derive(Deserialize)]
struct StoredStakeholder {
    id: StakeholderId,
    #[serde(flatten)]
    attributes: StakeholderAttributes,
}

impl TryFrom<StoredStakeholder> for Stakeholder {
    type Error = ValidationError;

    fn try_from(stored: StoredStakeholder) -> Result<Self, Self::Error> {
        Stakeholder::new(stored.id, stored.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(name: &str) -> StakeholderAttributes {
        StakeholderAttributes::new(
            name,
            StakeholderRole::Customer,
            Level::High,
            Level::Low,
            Influence::Direct,
        )
    }

    #[test]
    fn new_trims_name() {
        let s = Stakeholder::new(StakeholderId::new(), attrs("  Acme Corp ")).unwrap();
        assert_eq!(s.name(), "Acme Corp");
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = Stakeholder::new(StakeholderId::new(), attrs("   "));
        assert_eq!(result, Err(ValidationError::empty_field("name")));
    }

    #[test]
    fn blank_notes_become_none() {
        let s = Stakeholder::new(StakeholderId::new(), attrs("A").with_notes("  ")).unwrap();
        assert_eq!(s.notes(), None);
    }

    #[test]
    fn notes_are_trimmed() {
        let s = Stakeholder::new(StakeholderId::new(), attrs("A").with_notes(" key buyer ")).unwrap();
        assert_eq!(s.notes(), Some("key buyer"));
    }

    #[test]
    fn quadrant_follows_levels() {
        let mut s = Stakeholder::new(StakeholderId::new(), attrs("A")).unwrap();
        assert_eq!(s.quadrant(), Quadrant::KeepSatisfied);

        s.set_levels(Level::High, Level::High);
        assert_eq!(s.quadrant(), Quadrant::ManageClosely);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let id: StakeholderId = "42".parse().unwrap();
        let s = Stakeholder::new(id, attrs("A").with_notes("n")).unwrap();
        let json = serde_json::to_value(&s).unwrap();

        assert_eq!(json["id"], "42");
        assert_eq!(json["name"], "A");
        assert_eq!(json["role"], "customer");
        assert_eq!(json["power"], "high");
        assert_eq!(json["interest"], "low");
        assert_eq!(json["influence"], "direct");
        assert_eq!(json["notes"], "n");
    }

    #[test]
    fn attributes_round_trip() {
        let original = attrs("A").with_notes("n");
        let s = Stakeholder::new(StakeholderId::new(), original.clone()).unwrap();
        assert_eq!(s.attributes(), original);
    }

    #[test]
    fn deserializing_normalizes_name_and_notes() {
        let s: Stakeholder = serde_json::from_str(
            r#"{"id":"1","name":"  Acme ","role":"customer","power":"high","interest":"low","influence":"direct","notes":"  "}"#,
        )
        .unwrap();

        assert_eq!(s.name(), "Acme");
        assert_eq!(s.notes(), None);
    }

    #[test]
    fn deserializing_blank_name_fails() {
        let result = serde_json::from_str::<Stakeholder>(
            r#"{"id":"1","name":"   ","role":"customer","power":"high","interest":"low","influence":"direct"}"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("name"), "{err}");
    }

    #[test]
    fn deserializing_blank_id_fails() {
        let result = serde_json::from_str::<Stakeholder>(
            r#"{"id":"","name":"A","role":"customer","power":"high","interest":"low","influence":"direct"}"#,
        );
        assert!(result.is_err());
    }
}
