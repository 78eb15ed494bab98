//! Stakeholder-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, StakeholderId, ValidationError};

/// Stakeholder-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakeholderError {
    /// Stakeholder was not found.
    NotFound(StakeholderId),
    /// Two stakeholders share an id.
    DuplicateId(StakeholderId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
}

impl StakeholderError {
    pub fn not_found(id: StakeholderId) -> Self {
        StakeholderError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StakeholderError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            StakeholderError::NotFound(_) => ErrorCode::StakeholderNotFound,
            StakeholderError::DuplicateId(_) => ErrorCode::DuplicateStakeholderId,
            StakeholderError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
        }
    }
    pub fn message(&self) -> String {
        match self {
            StakeholderError::NotFound(id) => format!("Stakeholder not found: {}", id),
            StakeholderError::DuplicateId(id) => format!("Duplicate stakeholder id: {}", id),
            StakeholderError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
        }
    }
}

impl std::fmt::Display for StakeholderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for StakeholderError {}

impl From<ValidationError> for StakeholderError {
    fn from(err: ValidationError) -> Self {
        StakeholderError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<StakeholderError> for DomainError {
    fn from(err: StakeholderError) -> Self {
        let base = DomainError::new(err.code(), err.message());
        match err {
            StakeholderError::NotFound(id) | StakeholderError::DuplicateId(id) => {
                base.with_detail("stakeholder_id", id.to_string())
            }
            StakeholderError::ValidationFailed { field, .. } => base.with_detail("field", field),
        }
    }
}
