//! StakeholderRole enum describing where a stakeholder sits relative to the project.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The seven stakeholder roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderRole {
    Internal,
    External,
    Customer,
    Supplier,
    Regulator,
    Community,
    Other,
}

impl StakeholderRole {
    /// Returns all roles in canonical order.
    pub fn all() -> &'static [StakeholderRole] {
        &[
            StakeholderRole::Internal,
            StakeholderRole::External,
            StakeholderRole::Customer,
            StakeholderRole::Supplier,
            StakeholderRole::Regulator,
            StakeholderRole::Community,
            StakeholderRole::Other,
        ]
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StakeholderRole::Internal => "internal",
            StakeholderRole::External => "external",
            StakeholderRole::Customer => "customer",
            StakeholderRole::Supplier => "supplier",
            StakeholderRole::Regulator => "regulator",
            StakeholderRole::Community => "community",
            StakeholderRole::Other => "other",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StakeholderRole::Internal => "Internal",
            StakeholderRole::External => "External",
            StakeholderRole::Customer => "Customer",
            StakeholderRole::Supplier => "Supplier",
            StakeholderRole::Regulator => "Regulator",
            StakeholderRole::Community => "Community",
            StakeholderRole::Other => "Other",
        }
    }
}

impl fmt::Display for StakeholderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StakeholderRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        StakeholderRole::all()
            .iter()
            .find(|role| role.as_str() == wanted)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("role", format!("unknown role '{}'", s.trim()))
            })
    }
}
