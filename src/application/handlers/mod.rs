//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Store mutations are synchronous; anything touching a port is async.

pub mod analysis;
pub mod data;
pub mod stakeholder;

pub use analysis::{
    ExportReportHandler, ExportReportResult, GetAnalysisHandler, GetMatrixViewHandler,
    GetMatrixViewQuery, GetNetworkViewHandler, MatrixView, NetworkView, QuadrantCell,
    StakeholderAnalysis,
};
pub use data::{
    ClearDataCommand, ClearDataHandler, ClearDataResult, LoadDataHandler, LoadDataResult,
    SaveDataHandler, SaveDataResult,
};
pub use stakeholder::{
    AddStakeholderCommand, AddStakeholderHandler, AddStakeholderResult, EditStakeholderCommand,
    EditStakeholderHandler, EditStakeholderResult, ReclassifyStakeholderCommand,
    ReclassifyStakeholderHandler, ReclassifyStakeholderResult, RemoveStakeholderCommand,
    RemoveStakeholderHandler, RemoveStakeholderResult,
};
