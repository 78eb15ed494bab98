//! ReportExporter port for writing the text report somewhere a user can open it

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while exporting a report
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Add stakeholders to export the report")]
    NothingToExport,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        let code = match err {
            ExportError::NothingToExport => ErrorCode::NothingToExport,
            ExportError::IoError(_) => ErrorCode::ExportFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Destination for rendered reports
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Write the report text
    ///
    /// Returns the location the report was written to
    async fn export(&self, report: &str) -> Result<PathBuf, ExportError>;
}
