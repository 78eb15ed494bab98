//! Writes reports to a directory on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::report::REPORT_FILE_NAME;
use crate::ports::{ExportError, ReportExporter};

/// Exports the report as a text file inside `output_dir`.
#[derive(Debug, Clone)]
pub struct FileReportExporter {
    output_dir: PathBuf,
    file_name: String,
}

impl FileReportExporter {
    /// Exporter using the standard report file name.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self::with_file_name(output_dir, REPORT_FILE_NAME)
    }

    pub fn with_file_name<P: AsRef<Path>>(output_dir: P, file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            file_name: file_name.into(),
        }
    }

    /// Full path the report is written to.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[async_trait]
impl ReportExporter for FileReportExporter {
    async fn export(&self, report: &str) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ExportError::IoError(e.to_string()))?;

        let path = self.report_path();
        fs::write(&path, report)
            .await
            .map_err(|e| ExportError::IoError(e.to_string()))?;

        info!(path = %path.display(), bytes = report.len(), "Exported stakeholder report");
        Ok(path)
    }
}
