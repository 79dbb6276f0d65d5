//! Text maze format.
//!
//! Format:
//! - `# Granularity: <g>`
//! - `# Dimensions: <rows> <cols> 3`
//! - for each layer `k` in 0..3:
//!   - `# Layer <k>: <shape>`
//!   - `rows` lines of exactly `cols` tokens
//!
//! Tokens: `%` wall, ` ` free, `.` goal, `P` start.

use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::core::{ArmShape, CellLabel};
use crate::grid::Maze;

const GRANULARITY_PREFIX: &str = "# Granularity: ";
const DIMENSIONS_PREFIX: &str = "# Dimensions: ";

/// Error type for maze persistence
#[derive(Error, Debug)]
pub enum MazeIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid token {token:?} at layer {layer}, row {row}, col {col}")]
    InvalidToken {
        token: char,
        layer: usize,
        row: usize,
        col: usize,
    },

    #[error("Dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
}

/// Save a maze to a text file
pub fn save_maze(maze: &Maze, path: &Path) -> Result<(), MazeIoError> {
    let mut file = std::fs::File::create(path)?;
    write_maze(maze, &mut file)
}

/// Write a maze in text format
pub fn write_maze<W: Write>(maze: &Maze, writer: &mut W) -> Result<(), MazeIoError> {
    let (rows, cols, layers) = maze.dimensions();

    let mut text = String::with_capacity((rows * (cols + 1) + 32) * layers + 64);
    text.push_str(&format!("{}{}\n", GRANULARITY_PREFIX, maze.granularity()));
    text.push_str(&format!("{}{} {} {}\n", DIMENSIONS_PREFIX, rows, cols, layers));

    for shape in ArmShape::ALL {
        text.push_str(&format!("# Layer {}: {}\n", shape.layer(), shape));
        for row in 0..rows {
            text.extend(
                maze.row_labels(shape.layer(), row)
                    .iter()
                    .map(|label| label.as_char()),
            );
            text.push('\n');
        }
    }

    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Load a maze from a text file
pub fn load_maze(path: &Path) -> Result<Maze, MazeIoError> {
    let mut file = std::fs::File::open(path)?;
    read_maze(&mut file)
}

/// Read a maze in text format
pub fn read_maze<R: Read>(reader: &mut R) -> Result<Maze, MazeIoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut lines = text.lines();

    let granularity = header_value(lines.next(), GRANULARITY_PREFIX)?
        .trim()
        .parse::<f32>()
        .map_err(|e| MazeIoError::InvalidFormat(format!("granularity: {}", e)))?;

    let dims: Vec<usize> = header_value(lines.next(), DIMENSIONS_PREFIX)?
        .split_whitespace()
        .map(|v| v.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|e| MazeIoError::InvalidFormat(format!("dimensions: {}", e)))?;
    let [rows, cols, layers] = dims[..] else {
        return Err(MazeIoError::InvalidFormat(format!(
            "expected 3 dimensions, found {}",
            dims.len()
        )));
    };
    if layers != Maze::LAYERS {
        return Err(MazeIoError::DimensionMismatch {
            what: "layer count".to_string(),
            expected: Maze::LAYERS,
            found: layers,
        });
    }

    rows.checked_mul(cols)
        .and_then(|n| n.checked_mul(layers))
        .ok_or_else(|| {
            MazeIoError::InvalidFormat(format!(
                "dimensions {} x {} x {} overflow the cell count",
                rows, cols, layers
            ))
        })?;

    // Grown row by row; the header is not trusted for preallocation
    let mut labels = Vec::new();
    for layer in 0..layers {
        let marker = format!("# Layer {}", layer);
        match lines.next() {
            Some(line) if line.starts_with(&marker) => {}
            other => {
                return Err(MazeIoError::InvalidFormat(format!(
                    "expected '{}', found {:?}",
                    marker, other
                )));
            }
        }

        for row in 0..rows {
            let line = lines.next().ok_or_else(|| MazeIoError::DimensionMismatch {
                what: format!("row count of layer {}", layer),
                expected: rows,
                found: row,
            })?;

            let before = labels.len();
            for (col, token) in line.chars().enumerate() {
                let label = CellLabel::from_char(token).ok_or(MazeIoError::InvalidToken {
                    token,
                    layer,
                    row,
                    col,
                })?;
                labels.push(label);
            }

            let found = labels.len() - before;
            if found != cols {
                return Err(MazeIoError::DimensionMismatch {
                    what: format!("width of layer {} row {}", layer, row),
                    expected: cols,
                    found,
                });
            }
        }
    }

    Maze::from_labels(rows, cols, granularity, labels).ok_or_else(|| {
        MazeIoError::InvalidFormat("expected exactly one start cell".to_string())
    })
}

fn header_value<'a>(line: Option<&'a str>, prefix: &str) -> Result<&'a str, MazeIoError> {
    line.and_then(|l| l.strip_prefix(prefix)).ok_or_else(|| {
        MazeIoError::InvalidFormat(format!("missing header '{}'", prefix.trim_end()))
    })
}
