//! Stakeholder domain module.
//!
//! Holds the stakeholder entity, the relationship value object, and the
//! store that owns both collections. Every derived view (matrix, network,
//! analysis, report) reads a store snapshot and never holds a reference
//! back into it.

mod entity;
mod errors;
mod relationship;
mod snapshot;
mod store;

pub use entity::{Stakeholder, StakeholderAttributes};
pub use errors::StakeholderError;
pub use relationship::Relationship;
pub use snapshot::StoreSnapshot;
pub use store::StakeholderStore;
