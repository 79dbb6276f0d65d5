//! Map definitions for batch maze generation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{ArmShape, Point2D};
use crate::error::Result;
use crate::geometry::{ArmModel, Goal, Segment, Window};
use crate::transform::{ConfigSpaceSampler, TransformConfig, TransformReport};

use super::error::ConfigLoadError;

/// One arm map: window, arm, obstacles and goals.
///
/// ```yaml
/// window: [300, 200]
/// start_point: [30, 120]
/// initial_shape: Ball
/// lengths: [40, 0, 40]
/// widths: [11, 15, 11]
/// obstacles:
///   - [0, 100, 100, 100]
/// goals:
///   - [110, 40, 10]
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    /// Window `[width, height]`
    pub window: [f32; 2],

    /// Initial arm centroid `[x, y]`
    pub start_point: [f32; 2],

    /// Initial arm shape
    #[serde(default)]
    pub initial_shape: ArmShape,

    /// Spine length per shape (Horizontal, Ball, Vertical)
    pub lengths: [f32; 3],

    /// Spine-to-outline distance per shape (Horizontal, Ball, Vertical)
    pub widths: [f32; 3],

    /// Obstacle segments `[start_x, start_y, end_x, end_y]`
    #[serde(default)]
    pub obstacles: Vec<[f32; 4]>,

    /// Goal circles `[x, y, radius]`
    #[serde(default)]
    pub goals: Vec<[f32; 3]>,

    /// Add the four window edges as obstacles
    #[serde(default = "default_true")]
    pub enclose_window: bool,
}

impl MapDefinition {
    /// Window rectangle
    pub fn window(&self) -> Window {
        Window::new(self.window[0], self.window[1])
    }

    /// Arm model at its start placement
    pub fn arm(&self) -> ArmModel {
        ArmModel::new(
            Point2D::new(self.start_point[0], self.start_point[1]),
            self.initial_shape,
            self.lengths,
            self.widths,
        )
    }

    /// Goal circles
    pub fn goals(&self) -> Vec<Goal> {
        self.goals.iter().copied().map(Goal::from_coords).collect()
    }

    /// Obstacle segments, window edges included when `enclose_window` is set
    pub fn obstacles(&self) -> Vec<Segment> {
        let mut obstacles: Vec<Segment> = self
            .obstacles
            .iter()
            .copied()
            .map(Segment::from_coords)
            .collect();
        if self.enclose_window {
            obstacles.extend(self.window().edges());
        }
        obstacles
    }

    /// Build the maze for this map.
    pub fn transform(&self, granularity: f32, config: &TransformConfig) -> Result<TransformReport> {
        let arm = self.arm();
        let goals = self.goals();
        let obstacles = self.obstacles();
        ConfigSpaceSampler::new(&arm, &goals, &obstacles, self.window())
            .with_config(config.clone())
            .transform(granularity)
    }
}

/// Named maps plus shared sampler settings, loaded from YAML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSet {
    /// Sampler settings applied to every map
    #[serde(default)]
    pub transform: TransformConfig,

    /// Maps by name
    #[serde(default)]
    pub maps: BTreeMap<String, MapDefinition>,
}

impl MapSet {
    /// Load a map set from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Look up a map by name
    pub fn get(&self, name: &str) -> std::result::Result<&MapDefinition, ConfigLoadError> {
        self.maps
            .get(name)
            .ok_or_else(|| ConfigLoadError::UnknownMap(name.to_string()))
    }

    /// Map names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }
}

fn default_true() -> bool {
    true
}
