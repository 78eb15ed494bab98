//! Report export configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::report::REPORT_FILE_NAME;

use super::error::ValidationError;

/// Where exported reports are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory for exported reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the report inside `output_dir`
    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,
}

impl ExportConfig {
    /// Full path the report is written to
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file_name)
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        if self.report_file_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.report_file_name"));
        }
        if self.report_file_name.contains(['/', '\\']) {
            return Err(ValidationError::InvalidFileName("export.report_file_name"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            report_file_name: default_report_file_name(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_report_file_name() -> String {
    REPORT_FILE_NAME.to_string()
}
