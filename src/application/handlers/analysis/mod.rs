//! Analysis and view query handlers, plus report export.

mod export_report;
mod get_analysis;
mod get_matrix_view;
mod get_network_view;

pub use export_report::{ExportReportHandler, ExportReportResult};
pub use get_analysis::{GetAnalysisHandler, StakeholderAnalysis};
pub use get_matrix_view::{GetMatrixViewHandler, GetMatrixViewQuery, MatrixView, QuadrantCell};
pub use get_network_view::{GetNetworkViewHandler, NetworkView};
