//! Stakeholder command handlers.

mod add_stakeholder;
mod edit_stakeholder;
mod reclassify_stakeholder;
mod remove_stakeholder;

pub use add_stakeholder::{AddStakeholderCommand, AddStakeholderHandler, AddStakeholderResult};
pub use edit_stakeholder::{EditStakeholderCommand, EditStakeholderHandler, EditStakeholderResult};
pub use reclassify_stakeholder::{
    ReclassifyStakeholderCommand, ReclassifyStakeholderHandler, ReclassifyStakeholderResult,
};
pub use remove_stakeholder::{
    RemoveStakeholderCommand, RemoveStakeholderHandler, RemoveStakeholderResult,
};
