//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the stakeholder domain.

mod errors;
mod ids;
mod influence;
mod level;
mod role;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::StakeholderId;
pub use influence::Influence;
pub use level::Level;
pub use role::StakeholderRole;
