//! Index ↔ configuration mapping.
//!
//! Sample `(row, col)` sits at `offset + (row, col) * granularity`. The
//! reverse direction rounds to the nearest sample, so converting an index
//! to a configuration and back always returns the same index.

use crate::core::{ArmShape, Configuration, GridIndex, Point2D};
use crate::error::{Result, TransformError};
use crate::geometry::Window;

/// Mapping between maze indices and continuous configurations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapping {
    granularity: f32,
    offset: Point2D,
}

impl GridMapping {
    /// Mapping anchored at the window origin.
    pub fn new(granularity: f32) -> Result<Self> {
        Self::with_offset(granularity, Point2D::ZERO)
    }

    /// Mapping whose sample (0, 0) sits at `offset`.
    pub fn with_offset(granularity: f32, offset: Point2D) -> Result<Self> {
        if !granularity.is_finite() || granularity <= 0.0 {
            return Err(TransformError::InvalidGranularity(granularity));
        }
        Ok(Self {
            granularity,
            offset,
        })
    }

    /// Sampling step
    #[inline]
    pub fn granularity(&self) -> f32 {
        self.granularity
    }

    /// Position of sample (0, 0)
    #[inline]
    pub fn offset(&self) -> Point2D {
        self.offset
    }

    /// Grid size `(rows, cols)` covering a window.
    ///
    /// `floor(dimension / granularity) + 1` on each axis; flooring never
    /// produces a sample beyond the far edge.
    ///
    /// # Errors
    /// [`TransformError::GridTooLarge`] if the `rows × cols × 3` cell count
    /// cannot be addressed.
    pub fn dimensions(&self, window: &Window) -> Result<(usize, usize)> {
        let too_large = || TransformError::GridTooLarge {
            width: window.width,
            height: window.height,
            granularity: self.granularity,
        };

        let rows = self.samples(window.width).ok_or_else(too_large)?;
        let cols = self.samples(window.height).ok_or_else(too_large)?;
        rows.checked_mul(cols)
            .and_then(|n| n.checked_mul(ArmShape::COUNT))
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or_else(too_large)?;
        Ok((rows, cols))
    }

    /// Samples along one axis of length `extent`.
    #[inline]
    fn samples(&self, extent: f32) -> Option<usize> {
        let steps = (extent / self.granularity).floor();
        if !steps.is_finite() || steps < 0.0 || steps >= usize::MAX as f32 {
            return None;
        }
        (steps as usize).checked_add(1)
    }

    /// Planar position of sample `(row, col)`.
    #[inline]
    pub fn position(&self, row: usize, col: usize) -> Point2D {
        Point2D::new(
            self.offset.x + row as f32 * self.granularity,
            self.offset.y + col as f32 * self.granularity,
        )
    }

    /// Configuration sampled at `index` (None for an unknown layer).
    pub fn index_to_configuration(&self, index: GridIndex) -> Option<Configuration> {
        let shape = ArmShape::from_layer(index.layer)?;
        Some(Configuration::at(self.position(index.row, index.col), shape))
    }

    /// Nearest sample index of a configuration.
    ///
    /// Returns None when the configuration lies before the offset by more
    /// than half a step, or is not finite.
    pub fn configuration_to_index(&self, config: &Configuration) -> Option<GridIndex> {
        let row = self.steps(config.x - self.offset.x)?;
        let col = self.steps(config.y - self.offset.y)?;
        Some(GridIndex::new(row, col, config.shape.layer()))
    }

    #[inline]
    fn steps(&self, distance: f32) -> Option<usize> {
        let steps = (distance / self.granularity).round();
        if !steps.is_finite() || steps < 0.0 {
            return None;
        }
        Some(steps as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_granularity() {
        for g in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                GridMapping::new(g),
                Err(TransformError::InvalidGranularity(_))
            ));
        }
    }

    #[test]
    fn test_dimensions_floor() {
        let window = Window::new(10.0, 7.0);
        let dims = |g| GridMapping::new(g).unwrap().dimensions(&window).unwrap();
        assert_eq!(dims(10.0), (2, 1));
        assert_eq!(dims(3.0), (4, 3));
        assert_eq!(dims(1.0), (11, 8));
    }

    #[test]
    fn test_dimensions_too_large() {
        let mapping = GridMapping::new(1e-10).unwrap();
        let result = mapping.dimensions(&Window::new(1e30, 1e30));
        assert!(matches!(result, Err(TransformError::GridTooLarge { .. })));

        // Each axis fits but the cell count does not
        let mapping = GridMapping::new(1.0).unwrap();
        let result = mapping.dimensions(&Window::new(1e10, 1e10));
        assert!(matches!(result, Err(TransformError::GridTooLarge { .. })));
    }

    #[test]
    fn test_index_to_configuration() {
        let mapping = GridMapping::new(2.5).unwrap();
        let config = mapping
            .index_to_configuration(GridIndex::new(2, 4, 2))
            .unwrap();
        assert_eq!(config, Configuration::new(5.0, 10.0, ArmShape::Vertical));
        assert!(mapping.index_to_configuration(GridIndex::new(0, 0, 3)).is_none());
    }

    #[test]
    fn test_configuration_to_index_rounds() {
        let mapping = GridMapping::new(10.0).unwrap();

        let idx = mapping.configuration_to_index(&Configuration::new(14.0, 26.0, ArmShape::Ball));
        assert_eq!(idx, Some(GridIndex::new(1, 3, 1)));

        // Slightly before the origin still snaps to 0
        let idx = mapping.configuration_to_index(&Configuration::new(-4.0, 0.0, ArmShape::Ball));
        assert_eq!(idx, Some(GridIndex::new(0, 0, 1)));

        let idx = mapping.configuration_to_index(&Configuration::new(-6.0, 0.0, ArmShape::Ball));
        assert_eq!(idx, None);
    }

    #[test]
    fn test_offset_round_trip() {
        let mapping = GridMapping::with_offset(0.5, Point2D::new(-3.0, 7.0)).unwrap();
        let (rows, cols) = mapping.dimensions(&Window::new(4.0, 4.0)).unwrap();
        for layer in 0..ArmShape::COUNT {
            for row in 0..rows {
                for col in 0..cols {
                    let index = GridIndex::new(row, col, layer);
                    let config = mapping.index_to_configuration(index).unwrap();
                    assert_eq!(mapping.configuration_to_index(&config), Some(index));
                }
            }
        }
    }
}
