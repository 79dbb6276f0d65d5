//! Discretized configuration space.
//!
//! - [`GridMapping`]: index ↔ configuration conversion for one granularity
//! - [`Maze`]: the labeled `rows × cols × 3` grid
//! - [`LabelCounts`]: per-label cell counts

mod coords;
mod maze;

pub use coords::GridMapping;
pub use maze::{LabelCounts, Maze};
