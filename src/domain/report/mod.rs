//! Report module - fixed-template text report.

mod formatter;

pub use formatter::{
    format_report, ANALYSIS_SECTION, RELATIONSHIP_SECTION, REPORT_FILE_NAME, REPORT_TITLE,
    STAKEHOLDER_SECTION,
};
