//! # Vastu-Maze: Configuration-Space Discretizer
//!
//! Turns a robotic arm map (window, obstacle segments, goal circles, arm
//! shape parameters) into a labeled three-layer grid that a path search
//! can walk.
//!
//! ## Configuration Space
//!
//! The arm has two planar degrees of freedom and three shape states, so
//! its configurations form a continuous `(x, y, shape)` space. The maze
//! samples that space every `granularity` units:
//!
//! ```text
//!   layer 0: Horizontal    layer 1: Ball        layer 2: Vertical
//!   ┌──────────────┐       ┌──────────────┐     ┌──────────────┐
//!   │%%%%   .      │       │%%     ..     │     │%%%%%%  .     │
//!   │%%%%          │  ◄──► │%%  P         │ ◄──►│%%%%%%        │
//!   │      %%%%    │       │      %%      │     │     %%%%%    │
//!   └──────────────┘       └──────────────┘     └──────────────┘
//!        rows = ⌊W/g⌋+1, cols = ⌊H/g⌋+1
//! ```
//!
//! Every sample is labeled `Wall` (arm leaves the window or touches an
//! obstacle), `Goal` (arm touches a goal), or `Free`; the arm's initial
//! configuration is then labeled `Start`.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_maze::core::{ArmShape, CellLabel, GridIndex, Point2D};
//! use vastu_maze::geometry::{ArmModel, Goal, Segment, Window};
//! use vastu_maze::transform::ConfigSpaceSampler;
//!
//! let arm = ArmModel::point(Point2D::new(0.0, 0.0), ArmShape::Ball);
//! let goals = [Goal::from_coords([8.0, 8.0, 1.0])];
//! let walls = [Segment::from_coords([5.0, 0.0, 5.0, 6.0])];
//!
//! let report = ConfigSpaceSampler::new(&arm, &goals, &walls, Window::new(10.0, 10.0))
//!     .transform(1.0)
//!     .unwrap();
//!
//! assert_eq!(report.maze.dimensions(), (11, 11, 3));
//! assert_eq!(report.maze.get(GridIndex::new(0, 0, 1)), Some(CellLabel::Start));
//! assert_eq!(report.maze.get(GridIndex::new(5, 3, 1)), Some(CellLabel::Wall));
//! assert_eq!(report.maze.get(GridIndex::new(8, 8, 1)), Some(CellLabel::Goal));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: value types (points, shapes, configurations, labels)
//! - [`geometry`]: obstacles, goals, window, arm footprint and predicates
//! - [`grid`]: index ↔ configuration mapping and the maze container
//! - [`transform`]: the configuration-space sampler
//! - [`io`]: text maze persistence
//! - [`config`]: YAML map definitions for batch runs
//! - [`compare`]: maze diffing against reference mazes

pub mod compare;
pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod io;
pub mod transform;

pub use compare::{MazeDiff, compare_mazes};
pub use config::{ConfigLoadError, MapDefinition, MapSet};
pub use core::{ArmShape, CellLabel, Configuration, GridIndex, Point2D};
pub use error::TransformError;
pub use geometry::{ArmModel, Goal, Segment, Window};
pub use grid::{GridMapping, LabelCounts, Maze};
pub use io::{MazeIoError, load_maze, save_maze};
pub use transform::{
    ConfigSpaceSampler, StartAnomaly, StartPolicy, TransformConfig, TransformReport,
    transform_to_maze,
};
