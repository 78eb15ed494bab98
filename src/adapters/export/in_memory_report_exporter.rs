//! Keeps exported reports in memory for tests.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::report::REPORT_FILE_NAME;
use crate::ports::{ExportError, ReportExporter};

/// Records every exported report.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportExporter {
    reports: Arc<RwLock<Vec<String>>>,
}

impl InMemoryReportExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently exported report.
    pub async fn last(&self) -> Option<String> {
        self.reports.read().await.last().cloned()
    }

    pub async fn export_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl ReportExporter for InMemoryReportExporter {
    async fn export(&self, report: &str) -> Result<PathBuf, ExportError> {
        self.reports.write().await.push(report.to_string());
        Ok(PathBuf::from(REPORT_FILE_NAME))
    }
}
