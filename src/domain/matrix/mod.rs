//! Matrix module - the power/interest classifier.
//!
//! - `quadrant` - total classification of (power, interest) into four quadrants
//! - `palette` - fixed colours for quadrants and roles
//! - `placement` - initial placement hints and the drop position → level mapping
//!
//! All functions are pure apart from the caller-supplied random source used
//! for placement jitter.

mod palette;
mod placement;
mod quadrant;

pub use palette::{
    color_for_levels, color_for_quadrant, color_for_role, color_for_role_name, DEFAULT_ROLE_COLOR,
};
pub use placement::{
    clamp_to_bounds, layout_matrix, level_at, suggest_position, Bounds, MatrixPoint, Position,
    MATRIX_MARGIN,
};
pub use quadrant::{classify, Quadrant};
