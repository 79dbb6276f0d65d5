//! Three-layer label grid handed to the path search.
//!
//! Labels are stored flat, layer-major:
//! ```text
//! index = (layer * rows + row) * cols + col
//! ```

use crate::core::{ArmShape, CellLabel, GridIndex};

/// Number of cells per label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    /// Wall cells
    pub wall: usize,
    /// Free cells
    pub free: usize,
    /// Goal cells
    pub goal: usize,
    /// Start cells (1 in a well-formed maze)
    pub start: usize,
}

impl LabelCounts {
    /// Total number of cells counted
    pub fn total(&self) -> usize {
        self.wall + self.free + self.goal + self.start
    }

    fn add(&mut self, label: CellLabel) {
        match label {
            CellLabel::Wall => self.wall += 1,
            CellLabel::Free => self.free += 1,
            CellLabel::Goal => self.goal += 1,
            CellLabel::Start => self.start += 1,
        }
    }
}

/// Fully labeled configuration-space grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    labels: Vec<CellLabel>,
    rows: usize,
    cols: usize,
    granularity: f32,
    start: GridIndex,
}

impl Maze {
    /// Number of layers (one per shape)
    pub const LAYERS: usize = ArmShape::COUNT;

    /// Grid of `rows × cols × 3` walls with START recorded at `start`.
    ///
    /// `rows` and `cols` come from [`GridMapping::dimensions`](super::GridMapping::dimensions),
    /// which rejects cell counts that overflow.
    ///
    /// The caller overwrites the labels; `start` must be relabeled through
    /// [`Maze::place_start`] once classification is done.
    pub(crate) fn walled(rows: usize, cols: usize, granularity: f32, start: GridIndex) -> Self {
        Self {
            labels: vec![CellLabel::Wall; rows * cols * Self::LAYERS],
            rows,
            cols,
            granularity,
            start,
        }
    }

    /// Build a maze from layer-major labels.
    ///
    /// Returns None unless `labels` has `rows * cols * 3` entries with
    /// exactly one [`CellLabel::Start`].
    pub fn from_labels(
        rows: usize,
        cols: usize,
        granularity: f32,
        labels: Vec<CellLabel>,
    ) -> Option<Self> {
        let cells = rows.checked_mul(cols)?.checked_mul(Self::LAYERS)?;
        if labels.len() != cells {
            return None;
        }

        let mut starts = labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == CellLabel::Start);
        let (flat, _) = starts.next()?;
        if starts.next().is_some() {
            return None;
        }

        let mut maze = Self {
            labels,
            rows,
            cols,
            granularity,
            start: GridIndex::default(),
        };
        maze.start = maze.flat_to_index(flat);
        Some(maze)
    }

    /// Rows (x samples)
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns (y samples)
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid dimensions `(rows, cols, layers)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, Self::LAYERS)
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.labels.len()
    }

    /// Sampling step the maze was built with
    #[inline]
    pub fn granularity(&self) -> f32 {
        self.granularity
    }

    /// Index of the START cell
    #[inline]
    pub fn start(&self) -> GridIndex {
        self.start
    }

    /// Is the index inside the grid?
    #[inline]
    pub fn contains(&self, index: GridIndex) -> bool {
        index.row < self.rows && index.col < self.cols && index.layer < Self::LAYERS
    }

    #[inline]
    fn flat(&self, index: GridIndex) -> Option<usize> {
        if self.contains(index) {
            Some((index.layer * self.rows + index.row) * self.cols + index.col)
        } else {
            None
        }
    }

    #[inline]
    fn flat_to_index(&self, flat: usize) -> GridIndex {
        let col = flat % self.cols;
        let row = (flat / self.cols) % self.rows;
        let layer = flat / (self.cols * self.rows);
        GridIndex::new(row, col, layer)
    }

    /// Label at `index` (None if out of range)
    #[inline]
    pub fn get(&self, index: GridIndex) -> Option<CellLabel> {
        self.flat(index).map(|i| self.labels[i])
    }

    /// Overwrite a classification label. START is placed separately.
    #[inline]
    pub(crate) fn set(&mut self, index: GridIndex, label: CellLabel) {
        if let Some(i) = self.flat(index) {
            self.labels[i] = label;
        }
    }

    /// Write START at the recorded start index, returning the label it replaced.
    pub(crate) fn place_start(&mut self) -> CellLabel {
        let start = self.start;
        let previous = self.get(start).unwrap_or_default();
        self.set(start, CellLabel::Start);
        previous
    }

    /// Labels of one row of one layer (`cols` entries)
    pub fn row_labels(&self, layer: usize, row: usize) -> &[CellLabel] {
        match self.flat(GridIndex::new(row, 0, layer)) {
            Some(begin) => &self.labels[begin..begin + self.cols],
            None => &[],
        }
    }

    /// Iterate over all cells in layer-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridIndex, CellLabel)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (self.flat_to_index(i), *label))
    }

    /// Indices of all GOAL cells
    pub fn goals(&self) -> Vec<GridIndex> {
        self.iter()
            .filter(|(_, label)| *label == CellLabel::Goal)
            .map(|(index, _)| index)
            .collect()
    }

    /// Count cells by label
    pub fn count_by_label(&self) -> LabelCounts {
        let mut counts = LabelCounts::default();
        for label in &self.labels {
            counts.add(*label);
        }
        counts
    }
}
