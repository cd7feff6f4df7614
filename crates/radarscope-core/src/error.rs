//! Configuration errors.
//!
//! The scan pipeline itself never fails; the only rejections happen when a
//! scanner is built from an invalid configuration or scan plane.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("radar range must be finite and positive, got {0}")]
    NonPositiveRange(f32),

    #[error("display half extent must be finite and positive, got ({x}, {y})")]
    NonPositiveExtent { x: f32, y: f32 },

    #[error("border offset must be finite and non-negative, got {0}")]
    NegativeBorder(f32),

    #[error("border offset {border} must be smaller than both display half extents ({x}, {y})")]
    BorderExceedsExtent { border: f32, x: f32, y: f32 },

    #[error("scan plane transform is not invertible")]
    DegenerateScanPlane,

    #[error("invalid radar configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}
