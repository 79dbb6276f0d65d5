//! Window rectangle bounding the plane.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

use super::error::GeometryError;
use super::segment::Segment;

/// Rectangle `[0, width] × [0, height]`, boundary inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Extent along X
    pub width: f32,
    /// Extent along Y
    pub height: f32,
}

impl Window {
    /// Create a new window
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Is the point inside the window (boundary inclusive)?
    #[inline]
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }

    /// The four boundary edges: left, bottom, right, top.
    pub fn edges(&self) -> [Segment; 4] {
        let (w, h) = (self.width, self.height);
        [
            Segment::from_coords([0.0, 0.0, 0.0, h]),
            Segment::from_coords([0.0, 0.0, w, 0.0]),
            Segment::from_coords([w, 0.0, w, h]),
            Segment::from_coords([0.0, h, w, h]),
        ]
    }

    /// Check that the window dimensions are usable.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(GeometryError::NonFinite(format!("window {:?}", self)));
        }
        if self.width < 0.0 {
            return Err(GeometryError::Negative {
                name: "window width",
                value: self.width,
            });
        }
        if self.height < 0.0 {
            return Err(GeometryError::Negative {
                name: "window height",
                value: self.height,
            });
        }
        Ok(())
    }
}
