//! Shared maps for the integration tests.

#![allow(dead_code)]

use vastu_maze::core::{ArmShape, Point2D};
use vastu_maze::geometry::{ArmModel, Goal, Segment, Window};

/// Map inputs in the order the sampler takes them.
pub struct TestMap {
    pub arm: ArmModel,
    pub goals: Vec<Goal>,
    pub obstacles: Vec<Segment>,
    pub window: Window,
}

/// Point arm in an empty window.
pub fn empty_map(width: f32, height: f32, start: Point2D) -> TestMap {
    TestMap {
        arm: ArmModel::point(start, ArmShape::Ball),
        goals: Vec::new(),
        obstacles: Vec::new(),
        window: Window::new(width, height),
    }
}

/// Arm with real length and width in a walled 60x40 room.
///
/// An inner wall splits the room; one goal on each side.
pub fn walled_room() -> TestMap {
    let window = Window::new(60.0, 40.0);
    let mut obstacles = vec![Segment::from_coords([30.0, 0.0, 30.0, 25.0])];
    obstacles.extend(window.edges());

    TestMap {
        arm: ArmModel::new(
            Point2D::new(10.0, 20.0),
            ArmShape::Ball,
            [8.0, 0.0, 8.0],
            [1.5, 2.0, 1.5],
        ),
        goals: vec![
            Goal::from_coords([50.0, 10.0, 2.0]),
            Goal::from_coords([20.0, 35.0, 1.0]),
        ],
        obstacles,
        window,
    }
}
