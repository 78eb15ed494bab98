//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the store; query handlers only read it.

pub mod handlers;

pub use handlers::{
    // Stakeholder commands
    AddStakeholderCommand, AddStakeholderHandler, AddStakeholderResult,
    EditStakeholderCommand, EditStakeholderHandler, EditStakeholderResult,
    ReclassifyStakeholderCommand, ReclassifyStakeholderHandler, ReclassifyStakeholderResult,
    RemoveStakeholderCommand, RemoveStakeholderHandler, RemoveStakeholderResult,
    // Persistence
    ClearDataCommand, ClearDataHandler, ClearDataResult,
    LoadDataHandler, LoadDataResult,
    SaveDataHandler, SaveDataResult,
    // Analysis and views
    ExportReportHandler, ExportReportResult,
    GetAnalysisHandler, StakeholderAnalysis,
    GetMatrixViewHandler, GetMatrixViewQuery, MatrixView, QuadrantCell,
    GetNetworkViewHandler, NetworkView,
};
