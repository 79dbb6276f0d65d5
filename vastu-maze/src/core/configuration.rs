//! Continuous configurations and discrete grid indices.

use serde::{Deserialize, Serialize};

use super::point::Point2D;
use super::shape::ArmShape;

/// A point (x, y, shape) in the arm's continuous configuration space.
///
/// Configurations are plain values; "moving" the arm means building a new
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// X coordinate of the arm's reference point
    pub x: f32,
    /// Y coordinate of the arm's reference point
    pub y: f32,
    /// Shape state
    pub shape: ArmShape,
}

impl Configuration {
    /// Create a new configuration
    #[inline]
    pub fn new(x: f32, y: f32, shape: ArmShape) -> Self {
        Self { x, y, shape }
    }

    /// Create a configuration at a planar position
    #[inline]
    pub fn at(position: Point2D, shape: ArmShape) -> Self {
        Self::new(position.x, position.y, shape)
    }

    /// Reference point of the arm
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.shape)
    }
}

/// Discrete maze index (row follows x, col follows y, layer follows shape).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridIndex {
    /// Row (x step count)
    pub row: usize,
    /// Column (y step count)
    pub col: usize,
    /// Shape layer
    pub layer: usize,
}

impl GridIndex {
    /// Create a new grid index
    #[inline]
    pub fn new(row: usize, col: usize, layer: usize) -> Self {
        Self { row, col, layer }
    }
}

impl std::fmt::Display for GridIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.row, self.col, self.layer)
    }
}
