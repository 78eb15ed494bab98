//! Fixed colour palette for rendering collaborators.
//!
//! Nothing in the domain depends on the actual values.

use crate::domain::foundation::{Level, StakeholderRole};

use super::{classify, Quadrant};

/// Colour used for unknown roles.
pub const DEFAULT_ROLE_COLOR: &str = "#A8A8A8";

/// Returns the marker colour for a power/interest combination.
pub fn color_for_levels(power: Level, interest: Level) -> &'static str {
    color_for_quadrant(classify(power, interest))
}

/// Returns the marker colour for a quadrant.
pub fn color_for_quadrant(quadrant: Quadrant) -> &'static str {
    match quadrant {
        Quadrant::ManageClosely => "#E74C3C",
        Quadrant::KeepSatisfied => "#F39C12",
        Quadrant::KeepInformed => "#3498DB",
        Quadrant::Monitor => "#95A5A6",
    }
}

/// Returns the colour for a role.
pub fn color_for_role(role: StakeholderRole) -> &'static str {
    match role {
        StakeholderRole::Internal => "#FF9500",
        StakeholderRole::External => "#00AAFF",
        StakeholderRole::Customer => "#FF5733",
        StakeholderRole::Supplier => "#33FF57",
        StakeholderRole::Regulator => "#5733FF",
        StakeholderRole::Community => "#FF33A8",
        StakeholderRole::Other => DEFAULT_ROLE_COLOR,
    }
}

/// Returns the colour for a role given by name, falling back to the default.
pub fn color_for_role_name(name: &str) -> &'static str {
    name.parse::<StakeholderRole>()
        .map(color_for_role)
        .unwrap_or(DEFAULT_ROLE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn role_colors_match_palette() {
        assert_eq!(color_for_role(StakeholderRole::Internal), "#FF9500");
        assert_eq!(color_for_role(StakeholderRole::Community), "#FF33A8");
        assert_eq!(color_for_role(StakeholderRole::Other), DEFAULT_ROLE_COLOR);
    }

    #[test]
    fn unknown_role_name_uses_default() {
        assert_eq!(color_for_role_name("boss"), DEFAULT_ROLE_COLOR);
        assert_eq!(color_for_role_name("Supplier"), "#33FF57");
    }

    #[test]
    fn each_quadrant_has_its_own_color() {
        let colors: HashSet<_> = Quadrant::all().iter().map(|q| color_for_quadrant(*q)).collect();
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn level_color_matches_quadrant_color() {
        assert_eq!(
            color_for_levels(Level::High, Level::High),
            color_for_quadrant(Quadrant::ManageClosely)
        );
    }
}
