//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a stakeholder.
///
/// Freshly created ids are UUID v4 strings, so an id is never handed out
/// twice. Any non-blank string is accepted when reading saved data, which
/// keeps documents written by older tools loadable. Deserialization goes
/// through [`FromStr`], so a blank id is rejected there too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StakeholderId(String);

impl StakeholderId {
    /// Creates a new random StakeholderId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a StakeholderId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StakeholderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StakeholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StakeholderId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for StakeholderId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StakeholderId> for String {
    fn from(id: StakeholderId) -> Self {
        id.0
    }
}

impl AsRef<str> for StakeholderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
