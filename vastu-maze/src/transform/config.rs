//! Sampler settings.

use serde::{Deserialize, Serialize};

/// What to do when the arm's initial configuration is itself blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// Write START anyway and report the anomaly
    #[default]
    Override,
    /// Fail with [`TransformError::StartCollides`](crate::TransformError::StartCollides)
    Reject,
}

/// Configuration for [`ConfigSpaceSampler`](super::ConfigSpaceSampler).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Inflate obstacles by half a cell diagonal (`granularity / √2`)
    #[serde(default = "default_true")]
    pub inflate_obstacles: bool,

    /// Handling of a blocked start configuration
    #[serde(default)]
    pub start_policy: StartPolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            inflate_obstacles: true,
            start_policy: StartPolicy::Override,
        }
    }
}

impl TransformConfig {
    /// Exact geometry: no obstacle inflation
    pub fn exact() -> Self {
        Self {
            inflate_obstacles: false,
            ..Self::default()
        }
    }

    /// Set the start policy
    pub fn with_start_policy(mut self, start_policy: StartPolicy) -> Self {
        self.start_policy = start_policy;
        self
    }
}

fn default_true() -> bool {
    true
}
