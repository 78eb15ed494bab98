//! Aggregate statistics over a list of stakeholders.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::foundation::{Influence, Level, StakeholderRole};
use crate::domain::matrix::Quadrant;
use crate::domain::stakeholder::Stakeholder;

/// Count of `High` versus `Low` on one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelDistribution {
    pub high: usize,
    pub low: usize,
}

impl LevelDistribution {
    fn record(&mut self, level: Level) {
        match level {
            Level::High => self.high += 1,
            Level::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.low
    }
}

/// Count of direct versus indirect influence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InfluenceDistribution {
    pub direct: usize,
    pub indirect: usize,
}

/// One row of the role distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role: StakeholderRole,
    pub count: usize,
}

/// Stakeholders per role, only for roles that occur.
///
/// Entries are kept in order of first appearance and serialize as a
/// `{ role: count }` object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDistribution {
    entries: Vec<RoleCount>,
}

impl Serialize for RoleDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.role.as_str(), &entry.count)?;
        }
        map.end()
    }
}

impl RoleDistribution {
    fn record(&mut self, role: StakeholderRole) {
        match self.entries.iter_mut().find(|e| e.role == role) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(RoleCount { role, count: 1 }),
        }
    }

    /// Returns the count for a role, zero if absent.
    pub fn count(&self, role: StakeholderRole) -> usize {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[RoleCount] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by count, largest first; ties keep first-appearance order.
    pub fn sorted_by_count(&self) -> Vec<RoleCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

/// Stakeholders per quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuadrantCounts {
    #[serde(rename = "monitorCount")]
    pub monitor: usize,
    #[serde(rename = "keepSatisfiedCount")]
    pub keep_satisfied: usize,
    #[serde(rename = "keepInformedCount")]
    pub keep_informed: usize,
    #[serde(rename = "manageCloselyCount")]
    pub manage_closely: usize,
}

impl QuadrantCounts {
    fn record(&mut self, quadrant: Quadrant) {
        match quadrant {
            Quadrant::Monitor => self.monitor += 1,
            Quadrant::KeepSatisfied => self.keep_satisfied += 1,
            Quadrant::KeepInformed => self.keep_informed += 1,
            Quadrant::ManageClosely => self.manage_closely += 1,
        }
    }

    pub fn get(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::Monitor => self.monitor,
            Quadrant::KeepSatisfied => self.keep_satisfied,
            Quadrant::KeepInformed => self.keep_informed,
            Quadrant::ManageClosely => self.manage_closely,
        }
    }
}

/// Every distribution the analysis view shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderStatistics {
    pub total: usize,
    #[serde(rename = "powerDistribution")]
    pub power: LevelDistribution,
    #[serde(rename = "interestDistribution")]
    pub interest: LevelDistribution,
    #[serde(rename = "influenceDistribution")]
    pub influence: InfluenceDistribution,
    #[serde(rename = "roleDistribution")]
    pub roles: RoleDistribution,
    #[serde(rename = "quadrantCounts")]
    pub quadrants: QuadrantCounts,
}

impl StakeholderStatistics {
    /// Computes all distributions in a single pass.
    pub fn compute(stakeholders: &[Stakeholder]) -> Self {
        let mut stats = Self {
            total: stakeholders.len(),
            ..Self::default()
        };

        for s in stakeholders {
            stats.power.record(s.power());
            stats.interest.record(s.interest());
            match s.influence() {
                Influence::Direct => stats.influence.direct += 1,
                Influence::Indirect => stats.influence.indirect += 1,
            }
            stats.roles.record(s.role());
            stats.quadrants.record(s.quadrant());
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StakeholderId;
    use crate::domain::stakeholder::StakeholderAttributes;

    fn stakeholder(
        role: StakeholderRole,
        power: Level,
        interest: Level,
        influence: Influence,
    ) -> Stakeholder {
        Stakeholder::new(
            StakeholderId::new(),
            StakeholderAttributes::new("S", role, power, interest, influence),
        )
        .unwrap()
    }

    #[test]
    fn empty_list_gives_all_zero() {
        let stats = StakeholderStatistics::compute(&[]);
        assert_eq!(stats, StakeholderStatistics::default());
        assert!(stats.roles.is_empty());
        assert_eq!(stats.power.total(), 0);
    }

    #[test]
    fn counts_each_distribution() {
        let list = vec![
            stakeholder(StakeholderRole::Customer, Level::High, Level::High, Influence::Direct),
            stakeholder(StakeholderRole::Internal, Level::Low, Level::Low, Influence::Indirect),
            stakeholder(StakeholderRole::Customer, Level::High, Level::Low, Influence::Direct),
        ];

        let stats = StakeholderStatistics::compute(&list);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.power, LevelDistribution { high: 2, low: 1 });
        assert_eq!(stats.interest, LevelDistribution { high: 1, low: 2 });
        assert_eq!(stats.influence, InfluenceDistribution { direct: 2, indirect: 1 });
        assert_eq!(stats.quadrants.manage_closely, 1);
        assert_eq!(stats.quadrants.keep_satisfied, 1);
        assert_eq!(stats.quadrants.monitor, 1);
        assert_eq!(stats.quadrants.keep_informed, 0);
    }

    #[test]
    fn role_distribution_omits_absent_roles() {
        let list = vec![
            stakeholder(StakeholderRole::Supplier, Level::Low, Level::Low, Influence::Direct),
            stakeholder(StakeholderRole::Regulator, Level::Low, Level::Low, Influence::Direct),
            stakeholder(StakeholderRole::Regulator, Level::Low, Level::Low, Influence::Direct),
        ];

        let stats = StakeholderStatistics::compute(&list);

        assert_eq!(stats.roles.entries().len(), 2);
        assert_eq!(stats.roles.entries()[0].role, StakeholderRole::Supplier);
        assert_eq!(stats.roles.count(StakeholderRole::Regulator), 2);
        assert_eq!(stats.roles.count(StakeholderRole::Community), 0);
        assert_eq!(stats.roles.sorted_by_count()[0].role, StakeholderRole::Regulator);
    }

    #[test]
    fn quadrant_counts_get_matches_fields() {
        let counts = QuadrantCounts {
            monitor: 1,
            keep_satisfied: 2,
            keep_informed: 3,
            manage_closely: 4,
        };
        assert_eq!(counts.get(Quadrant::ManageClosely), 4);
        assert_eq!(counts.get(Quadrant::KeepInformed), 3);
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let stats = StakeholderStatistics::compute(&[stakeholder(
            StakeholderRole::Other,
            Level::High,
            Level::High,
            Influence::Direct,
        )]);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["quadrantCounts"]["manageCloselyCount"], 1);
        assert_eq!(json["powerDistribution"]["high"], 1);
        assert_eq!(json["roleDistribution"]["other"], 1);
    }

    #[test]
    fn role_distribution_serializes_as_object_in_first_appearance_order() {
        let stats = StakeholderStatistics::compute(&[
            stakeholder(StakeholderRole::Supplier, Level::Low, Level::Low, Influence::Direct),
            stakeholder(StakeholderRole::Customer, Level::Low, Level::Low, Influence::Direct),
            stakeholder(StakeholderRole::Supplier, Level::High, Level::Low, Influence::Indirect),
        ]);

        let json = serde_json::to_string(&stats.roles).unwrap();
        assert_eq!(json, r#"{"supplier":2,"customer":1}"#);
    }
}
