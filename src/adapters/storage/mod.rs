//! Storage Adapters
//!
//! Implementations of the SnapshotStorage port for persisting stakeholder data.
//!
//! ## Available Adapters
//!
//! - **FileSnapshotStorage** - Stores the document as a JSON file on disk
//! - **InMemorySnapshotStorage** - Stores the document in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSnapshotStorage, InMemorySnapshotStorage};
//!
//! // Production: file-based storage
//! let storage = FileSnapshotStorage::new("./data/stakeholder-data.json");
//!
//! // Testing: in-memory storage
//! let storage = InMemorySnapshotStorage::new();
//! ```

mod file_snapshot_storage;
mod in_memory_snapshot_storage;

pub use file_snapshot_storage::FileSnapshotStorage;
pub use in_memory_snapshot_storage::InMemorySnapshotStorage;
