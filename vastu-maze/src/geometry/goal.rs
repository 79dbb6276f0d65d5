//! Circular goal regions.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

use super::error::GeometryError;

/// A goal circle the arm must touch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Circle center.
    pub center: Point2D,
    /// Circle radius (0 is a point goal).
    pub radius: f32,
}

impl Goal {
    /// Create a new goal.
    pub fn new(center: Point2D, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Create a goal from `[x, y, radius]`.
    pub fn from_coords(coords: [f32; 3]) -> Self {
        Self::new(Point2D::new(coords[0], coords[1]), coords[2])
    }

    /// Check that the goal is well formed.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.center.is_finite() || !self.radius.is_finite() {
            return Err(GeometryError::NonFinite(format!("goal {:?}", self)));
        }
        if self.radius < 0.0 {
            return Err(GeometryError::Negative {
                name: "goal radius",
                value: self.radius,
            });
        }
        Ok(())
    }
}
