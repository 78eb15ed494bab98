//! Advisory sentences derived from stakeholder statistics.

use crate::domain::matrix::Quadrant;

use super::StakeholderStatistics;

/// Produces the strategic recommendations for a set of statistics.
///
/// Order is fixed: one note per non-empty quadrant (Manage Closely, Keep
/// Satisfied, Keep Informed, Monitor), then the power comparison, then the
/// interest comparison. An empty store yields no insights.
pub fn generate_insights(stats: &StakeholderStatistics) -> Vec<String> {
    let mut insights = Vec::new();

    for quadrant in Quadrant::all() {
        let count = stats.quadrants.get(*quadrant);
        if count > 0 {
            insights.push(quadrant_note(*quadrant, count));
        }
    }

    if stats.power.high > stats.power.low {
        insights.push(format!(
            "Be aware that your project has more high-power stakeholders ({}) than low-power ones ({})",
            stats.power.high, stats.power.low
        ));
    }

    if stats.interest.high > stats.interest.low {
        insights.push(format!(
            "There is strong interest in your project with {} highly interested stakeholders",
            stats.interest.high
        ));
    }

    insights
}

fn quadrant_note(quadrant: Quadrant, count: usize) -> String {
    let advice = match quadrant {
        Quadrant::ManageClosely => format!(
            "prioritize engagement with the {} high power, high interest stakeholders",
            count
        ),
        Quadrant::KeepSatisfied => format!(
            "keep the {} high power, low interest stakeholders satisfied with regular updates",
            count
        ),
        Quadrant::KeepInformed => format!(
            "keep the {} high interest stakeholders informed about progress",
            count
        ),
        Quadrant::Monitor => format!(
            "monitor the {} low power, low interest stakeholders with minimal effort",
            count
        ),
    };
    format!("{}: {}", quadrant.label(), advice)
}

/// Lists how many stakeholders sit in each quadrant, zero counts included.
///
/// Lines follow the matrix reading order (Monitor first), e.g.
/// `Monitor (Low Power, Low Interest): 2 stakeholders`.
pub fn distribution_summary(stats: &StakeholderStatistics) -> Vec<String> {
    [
        Quadrant::Monitor,
        Quadrant::KeepSatisfied,
        Quadrant::KeepInformed,
        Quadrant::ManageClosely,
    ]
    .iter()
    .map(|q| {
        format!(
            "{} ({}): {} stakeholders",
            q.label(),
            q.description(),
            stats.quadrants.get(*q)
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{LevelDistribution, QuadrantCounts};

    fn stats(quadrants: QuadrantCounts) -> StakeholderStatistics {
        let power = LevelDistribution {
            high: quadrants.manage_closely + quadrants.keep_satisfied,
            low: quadrants.monitor + quadrants.keep_informed,
        };
        let interest = LevelDistribution {
            high: quadrants.manage_closely + quadrants.keep_informed,
            low: quadrants.monitor + quadrants.keep_satisfied,
        };
        StakeholderStatistics {
            total: power.total(),
            power,
            interest,
            quadrants,
            ..StakeholderStatistics::default()
        }
    }

    #[test]
    fn empty_statistics_give_no_insights() {
        assert!(generate_insights(&StakeholderStatistics::default()).is_empty());
    }

    #[test]
    fn quadrant_notes_come_in_fixed_order() {
        let insights = generate_insights(&stats(QuadrantCounts {
            monitor: 1,
            keep_satisfied: 1,
            keep_informed: 1,
            manage_closely: 1,
        }));

        assert_eq!(insights.len(), 4);
        assert!(insights[0].starts_with("Manage Closely"));
        assert!(insights[1].starts_with("Keep Satisfied"));
        assert!(insights[2].starts_with("Keep Informed"));
        assert!(insights[3].starts_with("Monitor"));
    }

    #[test]
    fn comparisons_follow_quadrant_notes() {
        let insights = generate_insights(&stats(QuadrantCounts {
            manage_closely: 3,
            ..QuadrantCounts::default()
        }));

        assert_eq!(
            insights,
            vec![
                "Manage Closely: prioritize engagement with the 3 high power, high interest stakeholders"
                    .to_string(),
                "Be aware that your project has more high-power stakeholders (3) than low-power ones (0)"
                    .to_string(),
                "There is strong interest in your project with 3 highly interested stakeholders"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn equal_counts_emit_no_comparison() {
        let insights = generate_insights(&stats(QuadrantCounts {
            manage_closely: 1,
            monitor: 1,
            ..QuadrantCounts::default()
        }));

        assert_eq!(insights.len(), 2);
        assert!(insights[0].contains("Manage Closely") && insights[0].contains('1'));
        assert!(insights[1].starts_with("Monitor"));
    }

    #[test]
    fn distribution_summary_lists_all_quadrants() {
        let summary = distribution_summary(&stats(QuadrantCounts {
            keep_informed: 2,
            ..QuadrantCounts::default()
        }));

        assert_eq!(summary.len(), 4);
        assert_eq!(summary[0], "Monitor (Low Power, Low Interest): 0 stakeholders");
        assert_eq!(summary[2], "Keep Informed (Low Power, High Interest): 2 stakeholders");
    }
}
