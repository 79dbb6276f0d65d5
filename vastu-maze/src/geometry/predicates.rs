//! Collision predicates evaluated against an arm footprint.
//!
//! Contact is inclusive: a footprint whose outline exactly reaches an
//! obstacle or goal touches it.

use super::arm::Footprint;
use super::goal::Goal;
use super::segment::Segment;
use super::window::Window;

/// Obstacle inflation for a sampling step: half the diagonal of one cell.
///
/// A wall that passes between two neighbouring samples is still within this
/// distance of at least one of them.
#[inline]
pub fn obstacle_tolerance(granularity: f32) -> f32 {
    granularity / std::f32::consts::SQRT_2
}

/// Is the whole footprint inside the window (boundary inclusive)?
#[inline]
pub fn within_window(footprint: &Footprint, window: &Window) -> bool {
    window.contains_point(footprint.min_corner()) && window.contains_point(footprint.max_corner())
}

/// Does the footprint, inflated by `tolerance`, touch any obstacle?
#[inline]
pub fn collides_with_any(footprint: &Footprint, obstacles: &[Segment], tolerance: f32) -> bool {
    obstacles
        .iter()
        .any(|obstacle| footprint.clearance_to_segment(obstacle) <= tolerance)
}

/// Does the footprint touch any goal circle?
#[inline]
pub fn touches_any_goal(footprint: &Footprint, goals: &[Goal]) -> bool {
    goals
        .iter()
        .any(|goal| footprint.clearance_to_point(goal.center) <= goal.radius)
}
