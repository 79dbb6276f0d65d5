//! Geometry validation errors.

use thiserror::Error;

/// Malformed geometric input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("non-finite coordinate in {0}")]
    NonFinite(String),

    #[error("negative {name}: {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("degenerate obstacle segment at ({x}, {y})")]
    DegenerateSegment { x: f32, y: f32 },
}
