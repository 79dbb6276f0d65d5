//! Map → maze transformation.
//!
//! [`ConfigSpaceSampler`] walks every `(row, col, layer)` sample of the
//! configuration space, places the arm there, and labels the sample. The
//! arm model is never mutated: each probe builds its own footprint from
//! the arm parameters and the sampled configuration.
//!
//! ```rust,ignore
//! use vastu_maze::transform::{ConfigSpaceSampler, TransformConfig};
//!
//! let report = ConfigSpaceSampler::new(&arm, &goals, &obstacles, window)
//!     .with_config(TransformConfig::default())
//!     .transform(granularity)?;
//!
//! if let Some(anomaly) = report.anomaly {
//!     println!("start is blocked: {:?}", anomaly);
//! }
//! ```

mod config;
mod sampler;

pub use config::{StartPolicy, TransformConfig};
pub use sampler::{ConfigSpaceSampler, StartAnomaly, TransformReport};

use crate::error::Result;
use crate::geometry::{ArmModel, Goal, Segment, Window};
use crate::grid::Maze;

/// Build a maze with the default sampler configuration.
pub fn transform_to_maze(
    arm: &ArmModel,
    goals: &[Goal],
    obstacles: &[Segment],
    window: Window,
    granularity: f32,
) -> Result<Maze> {
    ConfigSpaceSampler::new(arm, goals, obstacles, window)
        .transform(granularity)
        .map(|report| report.maze)
}
