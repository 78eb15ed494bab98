//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SnapshotStorage` - Save/load/clear the stakeholder document
//! - `ReportExporter` - Write the text report to its destination

mod report_exporter;
mod snapshot_storage;

pub use report_exporter::{ExportError, ReportExporter};
pub use snapshot_storage::{SnapshotStorage, StorageError};
