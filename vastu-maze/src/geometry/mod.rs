//! Geometric model of the arm and its environment.
//!
//! - [`Segment`]: obstacle walls and arm spines
//! - [`Goal`]: circles the arm must touch
//! - [`Window`]: the rectangle bounding the plane
//! - [`ArmModel`] / [`Footprint`]: the arm placed at a configuration
//! - [`predicates`]: window containment, obstacle and goal contact

mod arm;
mod error;
mod goal;
pub mod predicates;
mod segment;
mod window;

pub use arm::{ArmModel, Footprint};
pub use error::GeometryError;
pub use goal::Goal;
pub use predicates::{collides_with_any, obstacle_tolerance, touches_any_goal, within_window};
pub use segment::Segment;
pub use window::Window;
