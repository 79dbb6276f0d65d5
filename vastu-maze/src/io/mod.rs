//! Maze persistence.
//!
//! ```rust,ignore
//! use vastu_maze::io::{save_maze, load_maze};
//! use std::path::Path;
//!
//! save_maze(&maze, Path::new("mazes/Test1_granularity_2.txt"))?;
//! let maze = load_maze(Path::new("mazes/Test1_granularity_2.txt"))?;
//! ```

mod artifacts;
pub mod maze_format;

pub use artifacts::ArtifactNamer;
pub use maze_format::{MazeIoError, load_maze, read_maze, save_maze, write_maze};
