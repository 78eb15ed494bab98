//! Quadrant classification on the power/interest matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Level;

/// The four engagement strategies of the power/interest matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quadrant {
    ManageClosely,
    KeepSatisfied,
    KeepInformed,
    Monitor,
}

/// Classifies a stakeholder by power and interest.
///
/// | power | interest | quadrant       |
/// |-------|----------|----------------|
/// | low   | low      | Monitor        |
/// | high  | low      | KeepSatisfied  |
/// | low   | high     | KeepInformed   |
/// | high  | high     | ManageClosely  |
pub fn classify(power: Level, interest: Level) -> Quadrant {
    match (power, interest) {
        (Level::Low, Level::Low) => Quadrant::Monitor,
        (Level::High, Level::Low) => Quadrant::KeepSatisfied,
        (Level::Low, Level::High) => Quadrant::KeepInformed,
        (Level::High, Level::High) => Quadrant::ManageClosely,
    }
}

impl Quadrant {
    /// Returns all quadrants, highest engagement first.
    pub fn all() -> &'static [Quadrant] {
        &[
            Quadrant::ManageClosely,
            Quadrant::KeepSatisfied,
            Quadrant::KeepInformed,
            Quadrant::Monitor,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::ManageClosely => "Manage Closely",
            Quadrant::KeepSatisfied => "Keep Satisfied",
            Quadrant::KeepInformed => "Keep Informed",
            Quadrant::Monitor => "Monitor",
        }
    }

    /// Returns the attribute combination the quadrant stands for.
    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::ManageClosely => "High Power, High Interest",
            Quadrant::KeepSatisfied => "High Power, Low Interest",
            Quadrant::KeepInformed => "Low Power, High Interest",
            Quadrant::Monitor => "Low Power, Low Interest",
        }
    }

    /// Returns the (power, interest) pair that classifies into this quadrant.
    pub fn levels(&self) -> (Level, Level) {
        match self {
            Quadrant::ManageClosely => (Level::High, Level::High),
            Quadrant::KeepSatisfied => (Level::High, Level::Low),
            Quadrant::KeepInformed => (Level::Low, Level::High),
            Quadrant::Monitor => (Level::Low, Level::Low),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
