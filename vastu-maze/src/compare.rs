//! Cell-by-cell comparison of two mazes.
//!
//! Used to check generated mazes against reference ("ground truth") mazes.
//! Differences are grouped by `(expected, actual)` label pair and reported
//! as continuous configurations, which is easier to relate to the map than
//! raw indices.

use std::collections::BTreeMap;

use crate::core::{CellLabel, Configuration, GridIndex};
use crate::grid::{GridMapping, Maze};

/// Differences between an expected and an actual maze.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MazeDiff {
    /// Differing cells keyed by `(expected, actual)`
    pub differences: BTreeMap<(CellLabel, CellLabel), Vec<GridIndex>>,
    /// Mapping used to report configurations (from the expected maze)
    mapping: Option<GridMapping>,
}

impl MazeDiff {
    /// True if the mazes agree on every cell
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Total number of differing cells
    pub fn len(&self) -> usize {
        self.differences.values().map(Vec::len).sum()
    }

    /// Differing configurations for one label pair
    pub fn configurations(&self, expected: CellLabel, actual: CellLabel) -> Vec<Configuration> {
        let (Some(mapping), Some(indices)) =
            (self.mapping, self.differences.get(&(expected, actual)))
        else {
            return Vec::new();
        };
        indices
            .iter()
            .filter_map(|index| mapping.index_to_configuration(*index))
            .collect()
    }
}

impl std::fmt::Display for MazeDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no differences");
        }
        for (expected, actual) in self.differences.keys() {
            let configs: Vec<String> = self
                .configurations(*expected, *actual)
                .iter()
                .map(Configuration::to_string)
                .collect();
            writeln!(
                f,
                "Ground truth {} mistakenly identified as {}: [{}]",
                expected.name(),
                actual.name(),
                configs.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Shape mismatch between two mazes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("maze dimensions differ: expected {expected:?}, found {found:?}")]
pub struct DimensionMismatch {
    /// Dimensions of the expected maze
    pub expected: (usize, usize, usize),
    /// Dimensions of the actual maze
    pub found: (usize, usize, usize),
}

/// Compare `actual` against `expected` cell by cell.
pub fn compare_mazes(expected: &Maze, actual: &Maze) -> Result<MazeDiff, DimensionMismatch> {
    if expected.dimensions() != actual.dimensions() {
        return Err(DimensionMismatch {
            expected: expected.dimensions(),
            found: actual.dimensions(),
        });
    }

    let mut diff = MazeDiff {
        mapping: GridMapping::new(expected.granularity()).ok(),
        ..MazeDiff::default()
    };
    for ((index, want), (_, got)) in expected.iter().zip(actual.iter()) {
        if want != got {
            diff.differences.entry((want, got)).or_default().push(index);
        }
    }
    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArmShape, Point2D};
    use crate::geometry::{ArmModel, Goal, Segment, Window};
    use crate::transform::transform_to_maze;

    fn maze(goals: &[Goal], walls: &[Segment]) -> Maze {
        let arm = ArmModel::point(Point2D::new(0.0, 0.0), ArmShape::Ball);
        transform_to_maze(&arm, goals, walls, Window::new(4.0, 4.0), 2.0).unwrap()
    }

    #[test]
    fn test_identical() {
        let a = maze(&[], &[]);
        let diff = compare_mazes(&a, &a.clone()).unwrap();
        assert!(diff.is_empty());
        assert_eq!(diff.len(), 0);
        assert_eq!(diff.to_string(), "no differences");
    }

    #[test]
    fn test_grouped_differences() {
        let expected = maze(&[Goal::from_coords([4.0, 4.0, 0.0])], &[]);
        let actual = maze(&[], &[Segment::from_coords([2.0, 0.0, 2.0, 0.5])]);

        let diff = compare_mazes(&expected, &actual).unwrap();

        // (4, 4) goal on every layer became free
        let lost_goals = diff.configurations(CellLabel::Goal, CellLabel::Free);
        assert_eq!(lost_goals.len(), 3);
        assert!(lost_goals.iter().all(|c| c.x == 4.0 && c.y == 4.0));

        // (2, 0) blocked on every layer
        let new_walls = diff.configurations(CellLabel::Free, CellLabel::Wall);
        assert_eq!(
            new_walls,
            vec![
                Configuration::new(2.0, 0.0, ArmShape::Horizontal),
                Configuration::new(2.0, 0.0, ArmShape::Ball),
                Configuration::new(2.0, 0.0, ArmShape::Vertical),
            ]
        );
        assert_eq!(diff.len(), 6);
        assert!(diff.to_string().contains("Ground truth goals mistakenly identified as free space"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let arm = ArmModel::point(Point2D::ZERO, ArmShape::Ball);
        let small = transform_to_maze(&arm, &[], &[], Window::new(2.0, 2.0), 1.0).unwrap();
        let large = transform_to_maze(&arm, &[], &[], Window::new(3.0, 2.0), 1.0).unwrap();
        let err = compare_mazes(&small, &large).unwrap_err();
        assert_eq!(err.expected, (3, 3, 3));
        assert_eq!(err.found, (4, 3, 3));
    }
}
