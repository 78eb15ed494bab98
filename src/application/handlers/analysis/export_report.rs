//! ExportReportHandler - Command handler for writing the text report.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::report::format_report;
use crate::domain::stakeholder::StakeholderStore;
use crate::ports::{ExportError, ReportExporter};

use super::GetAnalysisHandler;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReportResult {
    pub location: PathBuf,
    pub report: String,
}

/// Handler that renders the report and hands it to an exporter.
pub struct ExportReportHandler {
    exporter: Arc<dyn ReportExporter>,
}

impl ExportReportHandler {
    pub fn new(exporter: Arc<dyn ReportExporter>) -> Self {
        Self { exporter }
    }

    /// # Errors
    ///
    /// - `NothingToExport` if the store has no stakeholders
    /// - `IoError` if the exporter fails
    pub async fn handle(&self, store: &StakeholderStore) -> Result<ExportReportResult, ExportError> {
        if store.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let analysis = GetAnalysisHandler::new().handle(store);
        let report = format_report(store.all(), store.all_relationships(), &analysis.report_lines());

        let location = self.exporter.export(&report).await?;
        info!(location = %location.display(), "Report exported");

        Ok(ExportReportResult { location, report })
    }
}
