//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Snapshot storage implementations (JSON file, in-memory)
//! - `export` - Report exporters (file, in-memory)

pub mod export;
pub mod storage;

pub use export::{FileReportExporter, InMemoryReportExporter};
pub use storage::{FileSnapshotStorage, InMemorySnapshotStorage};
