//! Persistence command handlers.

mod clear_data;
mod load_data;
mod save_data;

pub use clear_data::{ClearDataCommand, ClearDataHandler, ClearDataResult};
pub use load_data::{LoadDataHandler, LoadDataResult};
pub use save_data::{SaveDataHandler, SaveDataResult};
