//! Influence enum - how a stakeholder affects the project.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether a stakeholder acts on the project directly or through others.
///
/// Independent of the power/interest quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Influence {
    Direct,
    Indirect,
}

impl fmt::Display for Influence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Influence::Direct => "Direct",
            Influence::Indirect => "Indirect",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Influence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Influence::Direct),
            "indirect" => Ok(Influence::Indirect),
            other => Err(ValidationError::invalid_format(
                "influence",
                format!("expected 'direct' or 'indirect', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", Influence::Direct), "Direct");
        assert_eq!(format!("{}", Influence::Indirect), "Indirect");
    }

    #[test]
    fn parses_from_wire_names() {
        assert_eq!("direct".parse::<Influence>().unwrap(), Influence::Direct);
        assert_eq!("Indirect".parse::<Influence>().unwrap(), Influence::Indirect);
        assert!("sideways".parse::<Influence>().is_err());
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let influence: Influence = serde_json::from_str("\"indirect\"").unwrap();
        assert_eq!(influence, Influence::Indirect);
    }
}
