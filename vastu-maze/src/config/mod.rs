//! Map configuration loading for the batch driver.
//!
//! All maps of a run live in one YAML file; see [`MapDefinition`].

mod error;
mod map;

pub use error::ConfigLoadError;
pub use map::{MapDefinition, MapSet};
