//! Error types for maze construction

use thiserror::Error;

use crate::core::GridIndex;
use crate::geometry::GeometryError;

/// Failure to build a maze from a map
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("granularity must be positive and finite, got {0}")]
    InvalidGranularity(f32),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("start configuration ({x}, {y}) maps outside the {rows}x{cols} grid")]
    StartOutOfRange {
        x: f32,
        y: f32,
        rows: usize,
        cols: usize,
    },

    #[error("{width}x{height} window at granularity {granularity} needs more cells than can be stored")]
    GridTooLarge {
        width: f32,
        height: f32,
        granularity: f32,
    },

    #[error("start cell {0} collides with the window or an obstacle")]
    StartCollides(GridIndex),
}

pub type Result<T> = std::result::Result<T, TransformError>;
