//! Configuration-space sampler.

use log::{debug, warn};

use crate::core::{ArmShape, CellLabel, Configuration, GridIndex};
use crate::error::{Result, TransformError};
use crate::geometry::{
    ArmModel, Goal, Segment, Window, collides_with_any, obstacle_tolerance, touches_any_goal,
    within_window,
};
use crate::grid::{GridMapping, LabelCounts, Maze};

use super::config::{StartPolicy, TransformConfig};

/// Irregularity found while placing the START cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartAnomaly {
    /// START overwrote a WALL cell; no search from it can succeed.
    Collides {
        /// Index of the START cell
        index: GridIndex,
    },
}

/// Result of one transform.
#[derive(Clone, Debug)]
pub struct TransformReport {
    /// The labeled maze
    pub maze: Maze,
    /// START index (same as `maze.start()`)
    pub start: GridIndex,
    /// Set when START was written over a WALL cell
    pub anomaly: Option<StartAnomaly>,
    /// Cells per label, START included
    pub counts: LabelCounts,
}

/// Samples the arm's configuration space and labels every sample.
///
/// Every sample is classified independently:
/// 1. outside the window or touching an obstacle → `Wall`
/// 2. touching a goal → `Goal`
/// 3. otherwise → `Free`
///
/// START is written after the whole grid is classified.
pub struct ConfigSpaceSampler<'a> {
    arm: &'a ArmModel,
    goals: &'a [Goal],
    obstacles: &'a [Segment],
    window: Window,
    config: TransformConfig,
}

impl<'a> ConfigSpaceSampler<'a> {
    /// Create a sampler with the default configuration.
    pub fn new(
        arm: &'a ArmModel,
        goals: &'a [Goal],
        obstacles: &'a [Segment],
        window: Window,
    ) -> Self {
        Self {
            arm,
            goals,
            obstacles,
            window,
            config: TransformConfig::default(),
        }
    }

    /// Replace the sampler configuration.
    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the sampler configuration.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Classify a single configuration.
    ///
    /// `tolerance` is the obstacle inflation distance.
    pub fn classify(&self, config: &Configuration, tolerance: f32) -> CellLabel {
        let footprint = self.arm.footprint(config);

        if !within_window(&footprint, &self.window)
            || collides_with_any(&footprint, self.obstacles, tolerance)
        {
            CellLabel::Wall
        } else if touches_any_goal(&footprint, self.goals) {
            CellLabel::Goal
        } else {
            CellLabel::Free
        }
    }

    /// Obstacle inflation used at a granularity.
    fn tolerance(&self, granularity: f32) -> f32 {
        if self.config.inflate_obstacles {
            obstacle_tolerance(granularity)
        } else {
            0.0
        }
    }

    fn validate(&self) -> Result<()> {
        self.window.validate()?;
        self.arm.validate()?;
        for goal in self.goals {
            goal.validate()?;
        }
        for obstacle in self.obstacles {
            obstacle.validate_obstacle()?;
        }
        Ok(())
    }

    /// Build the maze at `granularity`.
    ///
    /// # Errors
    /// - [`TransformError::InvalidGranularity`] if `granularity <= 0`
    /// - [`TransformError::InvalidGeometry`] for malformed window, arm, goals or obstacles
    /// - [`TransformError::GridTooLarge`] if the sample count overflows
    /// - [`TransformError::StartOutOfRange`] if the initial configuration maps outside the grid
    /// - [`TransformError::StartCollides`] under [`StartPolicy::Reject`]
    pub fn transform(&self, granularity: f32) -> Result<TransformReport> {
        let mapping = GridMapping::new(granularity)?;
        self.validate()?;

        let (rows, cols) = mapping.dimensions(&self.window)?;
        let initial = self.arm.initial_configuration();
        let start = mapping
            .configuration_to_index(&initial)
            .filter(|index| index.row < rows && index.col < cols)
            .ok_or(TransformError::StartOutOfRange {
                x: initial.x,
                y: initial.y,
                rows,
                cols,
            })?;

        let tolerance = self.tolerance(granularity);
        let mut maze = Maze::walled(rows, cols, granularity, start);

        for shape in ArmShape::ALL {
            for row in 0..rows {
                for col in 0..cols {
                    let config = Configuration::at(mapping.position(row, col), shape);
                    let label = self.classify(&config, tolerance);
                    maze.set(GridIndex::new(row, col, shape.layer()), label);
                }
            }
        }

        let mut anomaly = None;
        if maze.get(start) == Some(CellLabel::Wall) {
            match self.config.start_policy {
                StartPolicy::Reject => return Err(TransformError::StartCollides(start)),
                StartPolicy::Override => {
                    warn!(
                        "Start {} at {} collides; labeling START anyway",
                        initial, start
                    );
                    anomaly = Some(StartAnomaly::Collides { index: start });
                }
            }
        }
        maze.place_start();

        let counts = maze.count_by_label();
        debug!(
            "Sampled {}x{}x{} at granularity {}: {} wall, {} free, {} goal",
            rows,
            cols,
            Maze::LAYERS,
            granularity,
            counts.wall,
            counts.free,
            counts.goal
        );

        Ok(TransformReport {
            maze,
            start,
            anomaly,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;

    fn point_arm(x: f32, y: f32, shape: ArmShape) -> ArmModel {
        ArmModel::point(Point2D::new(x, y), shape)
    }

    #[test]
    fn test_empty_window_coarse() {
        let arm = point_arm(10.0, 0.0, ArmShape::Horizontal);
        let report = ConfigSpaceSampler::new(&arm, &[], &[], Window::new(10.0, 10.0))
            .transform(10.0)
            .unwrap();

        assert_eq!(report.maze.dimensions(), (2, 2, 3));
        assert_eq!(report.start, GridIndex::new(1, 0, 0));
        assert!(report.anomaly.is_none());

        for (index, label) in report.maze.iter() {
            if index == report.start {
                assert_eq!(label, CellLabel::Start);
            } else {
                assert_eq!(label, CellLabel::Free, "cell {}", index);
            }
        }
    }

    #[test]
    fn test_vertical_wall_blocks_column() {
        let arm = point_arm(1.0, 1.0, ArmShape::Ball);
        let walls = [Segment::from_coords([5.0, 0.0, 5.0, 10.0])];
        let report = ConfigSpaceSampler::new(&arm, &[], &walls, Window::new(10.0, 10.0))
            .transform(1.0)
            .unwrap();

        assert_eq!(report.maze.dimensions(), (11, 11, 3));
        for (index, label) in report.maze.iter() {
            if index.row == 5 {
                assert_eq!(label, CellLabel::Wall, "cell {}", index);
            } else if index != report.start {
                assert_eq!(label, CellLabel::Free, "cell {}", index);
            }
        }
    }

    #[test]
    fn test_point_goal() {
        let arm = point_arm(0.0, 0.0, ArmShape::Ball);
        let goals = [Goal::from_coords([2.0, 3.0, 0.0])];
        let report = ConfigSpaceSampler::new(&arm, &goals, &[], Window::new(5.0, 5.0))
            .transform(1.0)
            .unwrap();

        for layer in 0..Maze::LAYERS {
            assert_eq!(
                report.maze.get(GridIndex::new(2, 3, layer)),
                Some(CellLabel::Goal)
            );
        }
        assert_eq!(report.counts.goal, 3);
    }

    #[test]
    fn test_wall_beats_goal() {
        let arm = point_arm(0.0, 0.0, ArmShape::Ball);
        let goals = [Goal::from_coords([5.0, 5.0, 0.0])];
        let walls = [Segment::from_coords([5.0, 0.0, 5.0, 10.0])];
        let report = ConfigSpaceSampler::new(&arm, &goals, &walls, Window::new(10.0, 10.0))
            .transform(1.0)
            .unwrap();

        assert_eq!(
            report.maze.get(GridIndex::new(5, 5, 1)),
            Some(CellLabel::Wall)
        );
        assert_eq!(report.counts.goal, 0);
    }

    #[test]
    fn test_shape_dependent_window_fit() {
        // Length 4 horizontal spine: needs 2 units on each side along x
        let arm = ArmModel::new(
            Point2D::new(5.0, 5.0),
            ArmShape::Ball,
            [4.0, 0.0, 4.0],
            [0.0, 0.0, 0.0],
        );
        let maze = ConfigSpaceSampler::new(&arm, &[], &[], Window::new(10.0, 10.0))
            .transform(1.0)
            .unwrap()
            .maze;

        let horizontal = ArmShape::Horizontal.layer();
        let vertical = ArmShape::Vertical.layer();
        assert_eq!(maze.get(GridIndex::new(1, 5, horizontal)), Some(CellLabel::Wall));
        assert_eq!(maze.get(GridIndex::new(2, 5, horizontal)), Some(CellLabel::Free));
        assert_eq!(maze.get(GridIndex::new(8, 5, horizontal)), Some(CellLabel::Free));
        assert_eq!(maze.get(GridIndex::new(9, 5, horizontal)), Some(CellLabel::Wall));

        assert_eq!(maze.get(GridIndex::new(1, 5, vertical)), Some(CellLabel::Free));
        assert_eq!(maze.get(GridIndex::new(5, 1, vertical)), Some(CellLabel::Wall));
        assert_eq!(maze.get(GridIndex::new(5, 1, horizontal)), Some(CellLabel::Free));
    }

    #[test]
    fn test_inflation_toggle() {
        // Wall between samples x = 4 and x = 5
        let arm = point_arm(0.0, 0.0, ArmShape::Ball);
        let walls = [Segment::from_coords([4.5, 0.0, 4.5, 10.0])];
        let window = Window::new(10.0, 10.0);

        let inflated = ConfigSpaceSampler::new(&arm, &[], &walls, window)
            .transform(1.0)
            .unwrap();
        assert_eq!(
            inflated.maze.get(GridIndex::new(4, 2, 1)),
            Some(CellLabel::Wall)
        );

        let exact = ConfigSpaceSampler::new(&arm, &[], &walls, window)
            .with_config(TransformConfig::exact())
            .transform(1.0)
            .unwrap();
        assert_eq!(exact.maze.get(GridIndex::new(4, 2, 1)), Some(CellLabel::Free));
        assert_eq!(exact.maze.get(GridIndex::new(5, 2, 1)), Some(CellLabel::Free));
    }

    #[test]
    fn test_invalid_granularity() {
        let arm = point_arm(0.0, 0.0, ArmShape::Ball);
        let sampler = ConfigSpaceSampler::new(&arm, &[], &[], Window::new(10.0, 10.0));
        assert_eq!(
            sampler.transform(0.0).unwrap_err(),
            TransformError::InvalidGranularity(0.0)
        );
        assert!(matches!(
            sampler.transform(-2.0),
            Err(TransformError::InvalidGranularity(_))
        ));
    }

    #[test]
    fn test_invalid_geometry() {
        let arm = point_arm(0.0, 0.0, ArmShape::Ball);
        let walls = [Segment::from_coords([1.0, 1.0, 1.0, 1.0])];
        let result = ConfigSpaceSampler::new(&arm, &[], &walls, Window::new(10.0, 10.0))
            .transform(1.0);
        assert!(matches!(result, Err(TransformError::InvalidGeometry(_))));

        let result =
            ConfigSpaceSampler::new(&arm, &[], &[], Window::new(-1.0, 10.0)).transform(1.0);
        assert!(matches!(result, Err(TransformError::InvalidGeometry(_))));
    }

    #[test]
    fn test_grid_too_large() {
        let arm = point_arm(0.0, 0.0, ArmShape::Ball);
        let result =
            ConfigSpaceSampler::new(&arm, &[], &[], Window::new(1e30, 1e30)).transform(1e-10);
        assert_eq!(
            result.unwrap_err(),
            TransformError::GridTooLarge {
                width: 1e30,
                height: 1e30,
                granularity: 1e-10,
            }
        );
    }

    #[test]
    fn test_start_out_of_range() {
        let arm = point_arm(20.0, 0.0, ArmShape::Ball);
        let result = ConfigSpaceSampler::new(&arm, &[], &[], Window::new(10.0, 10.0))
            .transform(1.0);
        assert!(matches!(
            result,
            Err(TransformError::StartOutOfRange { rows: 11, cols: 11, .. })
        ));
    }

    #[test]
    fn test_colliding_start_policies() {
        let arm = point_arm(5.0, 5.0, ArmShape::Ball);
        let walls = [Segment::from_coords([5.0, 0.0, 5.0, 10.0])];
        let window = Window::new(10.0, 10.0);

        let report = ConfigSpaceSampler::new(&arm, &[], &walls, window)
            .transform(1.0)
            .unwrap();
        let start = GridIndex::new(5, 5, 1);
        assert_eq!(report.start, start);
        assert_eq!(report.maze.get(start), Some(CellLabel::Start));
        assert_eq!(report.anomaly, Some(StartAnomaly::Collides { index: start }));
        assert_eq!(report.counts.start, 1);

        let rejected = ConfigSpaceSampler::new(&arm, &[], &walls, window)
            .with_config(TransformConfig::default().with_start_policy(StartPolicy::Reject))
            .transform(1.0);
        assert_eq!(rejected.unwrap_err(), TransformError::StartCollides(start));
    }
}
