//! Arm shape states.
//!
//! Each shape owns one layer of the maze. The layer order is fixed and is
//! part of the persisted format.

use serde::{Deserialize, Serialize};

/// Shape state of the arm.
///
/// - `Horizontal` - spine lies along the X axis
/// - `Ball` - spine collapsed to a single point
/// - `Vertical` - spine lies along the Y axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ArmShape {
    /// Layer 0
    Horizontal = 0,
    /// Layer 1
    #[default]
    Ball = 1,
    /// Layer 2
    Vertical = 2,
}

impl ArmShape {
    /// Number of shape layers in a maze
    pub const COUNT: usize = 3;

    /// All shapes in layer order
    pub const ALL: [ArmShape; 3] = [ArmShape::Horizontal, ArmShape::Ball, ArmShape::Vertical];

    /// Maze layer owned by this shape
    #[inline]
    pub fn layer(self) -> usize {
        self as usize
    }

    /// Shape owning the given layer
    #[inline]
    pub fn from_layer(layer: usize) -> Option<Self> {
        Self::ALL.get(layer).copied()
    }

    /// Human readable name (matches the serialized form)
    pub fn name(self) -> &'static str {
        match self {
            ArmShape::Horizontal => "Horizontal",
            ArmShape::Ball => "Ball",
            ArmShape::Vertical => "Vertical",
        }
    }
}

impl std::fmt::Display for ArmShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
