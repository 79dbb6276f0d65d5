//! Map set loading errors.

use thiserror::Error;

/// Failure to load or query a map set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// Map set file could not be read
    #[error("cannot read map set: {0}")]
    Io(String),

    /// Map set file is not valid YAML for a [`MapSet`](super::MapSet)
    #[error("invalid map set: {0}")]
    Parse(String),

    /// Requested map is not defined in the map set
    #[error("map '{0}' is not defined in the map set")]
    UnknownMap(String),
}
