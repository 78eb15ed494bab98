//! Level enum shared by the power and interest axes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A two-valued rating used for both power and interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Returns true for `High`.
    pub fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Low => "low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::High => "High",
            Level::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Level::High),
            "low" => Ok(Level::Low),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("expected 'high' or 'low', got '{}'", other),
            )),
        }
    }
}
