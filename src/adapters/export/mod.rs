//! Report export adapters.
//!
//! - **FileReportExporter** - writes `stakeholder-analysis-report.txt` into a directory
//! - **InMemoryReportExporter** - records reports in memory (testing)

mod file_report_exporter;
mod in_memory_report_exporter;

pub use file_report_exporter::FileReportExporter;
pub use in_memory_report_exporter::InMemoryReportExporter;
