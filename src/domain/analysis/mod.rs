//! Analysis Module - Pure domain services for stakeholder analysis.
//!
//! # Components
//!
//! - `StakeholderStatistics` - power, interest, influence, role and quadrant distributions
//! - `generate_insights` - ordered strategic recommendations
//! - `distribution_summary` - per-quadrant count lines
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results.

mod insights;
mod statistics;

pub use insights::{distribution_summary, generate_insights};
pub use statistics::{
    InfluenceDistribution, LevelDistribution, QuadrantCounts, RoleCount, RoleDistribution,
    StakeholderStatistics,
};
