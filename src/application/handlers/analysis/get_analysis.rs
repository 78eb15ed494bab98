//! GetAnalysisHandler - Query handler for the analysis dashboard.
//!
//! Recomputed from the store on every call; nothing is cached.

use serde::Serialize;

use crate::domain::analysis::{distribution_summary, generate_insights, StakeholderStatistics};
use crate::domain::stakeholder::StakeholderStore;

/// Everything the analysis view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderAnalysis {
    pub statistics: StakeholderStatistics,
    /// One line per quadrant, zero counts included.
    pub distribution: Vec<String>,
    pub insights: Vec<String>,
}

impl StakeholderAnalysis {
    /// Lines for the report's analysis section: distribution, then insights.
    pub fn report_lines(&self) -> Vec<String> {
        self.distribution
            .iter()
            .chain(self.insights.iter())
            .cloned()
            .collect()
    }
}

/// Handler for computing the analysis.
#[derive(Debug, Default)]
pub struct GetAnalysisHandler;

impl GetAnalysisHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, store: &StakeholderStore) -> StakeholderAnalysis {
        let statistics = StakeholderStatistics::compute(store.all());
        let distribution = distribution_summary(&statistics);
        let insights = generate_insights(&statistics);

        StakeholderAnalysis {
            statistics,
            distribution,
            insights,
        }
    }
}
