//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, enums, errors)
//! - `stakeholder` - Stakeholder entity, relationships, and the owning store
//! - `matrix` - Power/interest classification, palette and placement hints
//! - `network` - Relationship graph projection
//! - `analysis` - Distributions and strategic insights
//! - `report` - Plain-text report rendering

pub mod analysis;
pub mod foundation;
pub mod matrix;
pub mod network;
pub mod report;
pub mod stakeholder;
