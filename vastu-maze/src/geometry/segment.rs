//! Line segment type used for obstacles and arm spines.
//!
//! Segments are stored by their endpoints only. A zero-length segment is a
//! valid spine (the `Ball` shape) but not a valid obstacle.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

use super::error::GeometryError;

/// A 2D line segment defined by its endpoints.
///
/// # Point-to-Segment Distance
///
/// Projects onto the supporting line and clamps to the segment:
/// ```text
/// t = dot(p - start, dir) / |dir|²,  t ∈ [0, 1]
/// distance = |p - (start + t * dir)|
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Start point of the segment.
    pub start: Point2D,
    /// End point of the segment.
    pub end: Point2D,
}

impl Segment {
    /// Create a new segment from two points.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Create a segment from `[start_x, start_y, end_x, end_y]`.
    #[inline]
    pub fn from_coords(coords: [f32; 4]) -> Self {
        Self::new(
            Point2D::new(coords[0], coords[1]),
            Point2D::new(coords[2], coords[3]),
        )
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length_squared().sqrt()
    }

    /// True if both endpoints coincide (within f32 epsilon).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction().length_squared() < f32::EPSILON
    }

    /// Get a point along the segment at parameter t (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        self.start + self.direction() * t
    }

    /// Project a point onto the supporting line, returning parameter t.
    ///
    /// Returns 0 for a degenerate segment.
    #[inline]
    pub fn project_point(&self, point: Point2D) -> f32 {
        let dir = self.direction();
        let len_sq = dir.length_squared();

        if len_sq < f32::EPSILON {
            return 0.0;
        }

        (point - self.start).dot(&dir) / len_sq
    }

    /// Distance from a point to the closest point on the segment.
    #[inline]
    pub fn distance_to_point(&self, point: Point2D) -> f32 {
        let t = self.project_point(point).clamp(0.0, 1.0);
        point.distance(&self.point_at(t))
    }

    /// True if the two segments cross at a single interior point.
    ///
    /// Touching endpoints and collinear overlaps are not proper crossings;
    /// [`Segment::distance_to_segment`] still reports 0 for them because an
    /// endpoint then lies on the other segment.
    pub fn crosses(&self, other: &Segment) -> bool {
        let d1 = self.direction();
        let d2 = other.direction();

        let o1 = d1.cross(&(other.start - self.start));
        let o2 = d1.cross(&(other.end - self.start));
        let o3 = d2.cross(&(self.start - other.start));
        let o4 = d2.cross(&(self.end - other.start));

        opposite_signs(o1, o2) && opposite_signs(o3, o4)
    }

    /// Minimum distance between two segments (0 if they intersect).
    pub fn distance_to_segment(&self, other: &Segment) -> f32 {
        if self.crosses(other) {
            return 0.0;
        }

        self.distance_to_point(other.start)
            .min(self.distance_to_point(other.end))
            .min(other.distance_to_point(self.start))
            .min(other.distance_to_point(self.end))
    }

    /// Check that the segment can act as an obstacle.
    pub fn validate_obstacle(&self) -> Result<(), GeometryError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GeometryError::NonFinite(format!("obstacle {:?}", self)));
        }
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateSegment {
                x: self.start.x,
                y: self.start.y,
            });
        }
        Ok(())
    }
}

#[inline]
fn opposite_signs(a: f32, b: f32) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
        Segment::from_coords([x0, y0, x1, y1])
    }

    #[test]
    fn test_distance_to_point() {
        let s = seg(0.0, 0.0, 10.0, 0.0);

        // Perpendicular foot inside the segment
        assert_relative_eq!(s.distance_to_point(Point2D::new(5.0, 3.0)), 3.0);
        // Beyond the end: distance to endpoint
        assert_relative_eq!(s.distance_to_point(Point2D::new(13.0, 4.0)), 5.0);
        // On the segment
        assert_eq!(s.distance_to_point(Point2D::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_degenerate_distance() {
        let point = seg(1.0, 1.0, 1.0, 1.0);
        assert!(point.is_degenerate());
        assert_relative_eq!(point.distance_to_point(Point2D::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_crossing_segments() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert!(a.crosses(&b));
        assert_eq!(a.distance_to_segment(&b), 0.0);
    }

    #[test]
    fn test_touching_segments() {
        // T-junction: endpoint of b lies on a
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 5.0, 5.0);
        assert!(!a.crosses(&b));
        assert_eq!(a.distance_to_segment(&b), 0.0);

        // Collinear overlap
        let c = seg(8.0, 0.0, 12.0, 0.0);
        assert_eq!(a.distance_to_segment(&c), 0.0);
    }

    #[test]
    fn test_parallel_segments() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(0.0, 2.0, 10.0, 2.0);
        assert!(!a.crosses(&b));
        assert_relative_eq!(a.distance_to_segment(&b), 2.0);
    }

    #[test]
    fn test_point_against_segment() {
        let point = seg(5.0, 3.0, 5.0, 3.0);
        let wall = seg(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(point.distance_to_segment(&wall), 3.0);
        assert_relative_eq!(wall.distance_to_segment(&point), 3.0);
    }

    #[test]
    fn test_validate_obstacle() {
        assert!(seg(0.0, 0.0, 1.0, 0.0).validate_obstacle().is_ok());
        assert!(matches!(
            seg(2.0, 2.0, 2.0, 2.0).validate_obstacle(),
            Err(GeometryError::DegenerateSegment { .. })
        ));
        assert!(matches!(
            seg(f32::NAN, 0.0, 1.0, 0.0).validate_obstacle(),
            Err(GeometryError::NonFinite(_))
        ));
    }
}
