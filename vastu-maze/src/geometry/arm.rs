//! Arm model and its footprint.
//!
//! The arm is a capsule: a spine segment centered on the configuration's
//! reference point, thickened by a per-shape radius. Placing the arm at a
//! configuration is a pure function of the arm parameters, so every probe
//! gets its own [`Footprint`] and the model itself is never mutated.
//!
//! ```text
//!  Horizontal           Ball        Vertical
//!                                    head (x, y - L/2)
//!  tail ───●─── head     ●             │
//!    (x - L/2, y)     (x, y)           ●
//!                                      │
//!                                    tail (x, y + L/2)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{ArmShape, Configuration, Point2D};

use super::error::GeometryError;
use super::segment::Segment;

/// Region occupied by the arm at one configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    /// Spine from head to tail (degenerate for `Ball`).
    pub spine: Segment,
    /// Distance from the spine to the outline.
    pub radius: f32,
}

impl Footprint {
    /// Lower-left corner of the axis-aligned bounding box.
    #[inline]
    pub fn min_corner(&self) -> Point2D {
        Point2D::new(
            self.spine.start.x.min(self.spine.end.x) - self.radius,
            self.spine.start.y.min(self.spine.end.y) - self.radius,
        )
    }

    /// Upper-right corner of the axis-aligned bounding box.
    #[inline]
    pub fn max_corner(&self) -> Point2D {
        Point2D::new(
            self.spine.start.x.max(self.spine.end.x) + self.radius,
            self.spine.start.y.max(self.spine.end.y) + self.radius,
        )
    }

    /// Gap between the outline and a segment (negative when overlapping).
    #[inline]
    pub fn clearance_to_segment(&self, segment: &Segment) -> f32 {
        self.spine.distance_to_segment(segment) - self.radius
    }

    /// Gap between the outline and a point (negative when inside).
    #[inline]
    pub fn clearance_to_point(&self, point: Point2D) -> f32 {
        self.spine.distance_to_point(point) - self.radius
    }
}

/// Shape parameters and initial placement of the arm.
///
/// `lengths` and `widths` are indexed by [`ArmShape::layer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmModel {
    /// Initial reference point
    pub centroid: Point2D,
    /// Initial shape
    #[serde(default)]
    pub initial_shape: ArmShape,
    /// Spine length per shape (the `Ball` entry is normally 0)
    pub lengths: [f32; 3],
    /// Spine-to-outline distance per shape
    pub widths: [f32; 3],
}

impl ArmModel {
    /// Create a new arm model
    pub fn new(
        centroid: Point2D,
        initial_shape: ArmShape,
        lengths: [f32; 3],
        widths: [f32; 3],
    ) -> Self {
        Self {
            centroid,
            initial_shape,
            lengths,
            widths,
        }
    }

    /// A zero-size point arm (every shape collapses to its reference point)
    pub fn point(centroid: Point2D, initial_shape: ArmShape) -> Self {
        Self::new(centroid, initial_shape, [0.0; 3], [0.0; 3])
    }

    /// Initial shape
    #[inline]
    pub fn shape(&self) -> ArmShape {
        self.initial_shape
    }

    /// Initial configuration (centroid + initial shape)
    #[inline]
    pub fn initial_configuration(&self) -> Configuration {
        Configuration::at(self.centroid, self.initial_shape)
    }

    /// Spine length of a shape
    #[inline]
    pub fn length(&self, shape: ArmShape) -> f32 {
        self.lengths[shape.layer()]
    }

    /// Spine-to-outline distance of a shape
    #[inline]
    pub fn width(&self, shape: ArmShape) -> f32 {
        self.widths[shape.layer()]
    }

    /// Region occupied by the arm placed at `config`.
    pub fn footprint(&self, config: &Configuration) -> Footprint {
        let half = self.length(config.shape) / 2.0;
        let (head, tail) = match config.shape {
            ArmShape::Horizontal => (
                Point2D::new(config.x + half, config.y),
                Point2D::new(config.x - half, config.y),
            ),
            ArmShape::Vertical => (
                Point2D::new(config.x, config.y - half),
                Point2D::new(config.x, config.y + half),
            ),
            ArmShape::Ball => (config.position(), config.position()),
        };

        Footprint {
            spine: Segment::new(head, tail),
            radius: self.width(config.shape),
        }
    }

    /// Check that all parameters are finite and non-negative.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.centroid.is_finite() {
            return Err(GeometryError::NonFinite(format!(
                "arm centroid {:?}",
                self.centroid
            )));
        }
        for shape in ArmShape::ALL {
            for (name, value) in [
                ("arm length", self.length(shape)),
                ("arm width", self.width(shape)),
            ] {
                if !value.is_finite() {
                    return Err(GeometryError::NonFinite(format!("{} of {}", name, shape)));
                }
                if value < 0.0 {
                    return Err(GeometryError::Negative { name, value });
                }
            }
        }
        Ok(())
    }
}
