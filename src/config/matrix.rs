//! Matrix view configuration

use serde::Deserialize;

use crate::domain::matrix::Bounds;

use super::error::ValidationError;

/// Size of the power/interest matrix container
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,
}

impl MatrixConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Validate matrix configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        // NaN fails both comparisons
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ValidationError::InvalidMatrixSize);
        }
        Ok(())
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}
