//! Cell labels for the configuration-space maze.

use serde::{Deserialize, Serialize};

/// Classification of one sampled configuration.
///
/// - `Wall` - arm leaves the window or touches an obstacle
/// - `Free` - arm fits and touches nothing
/// - `Goal` - arm fits and touches a goal
/// - `Start` - the arm's initial configuration
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum CellLabel {
    /// Blocked configuration
    #[default]
    Wall = 0,
    /// Reachable, no goal contact
    Free = 1,
    /// Reachable, touches a goal
    Goal = 2,
    /// Initial configuration of the arm
    Start = 3,
}

impl CellLabel {
    /// All labels
    pub const ALL: [CellLabel; 4] = [
        CellLabel::Wall,
        CellLabel::Free,
        CellLabel::Goal,
        CellLabel::Start,
    ];

    /// Token used by the text maze format
    pub fn as_char(self) -> char {
        match self {
            CellLabel::Wall => '%',
            CellLabel::Free => ' ',
            CellLabel::Goal => '.',
            CellLabel::Start => 'P',
        }
    }

    /// Parse a text maze token
    pub fn from_char(token: char) -> Option<Self> {
        match token {
            '%' => Some(CellLabel::Wall),
            ' ' => Some(CellLabel::Free),
            '.' => Some(CellLabel::Goal),
            'P' => Some(CellLabel::Start),
            _ => None,
        }
    }

    /// Lowercase name for reports
    pub fn name(self) -> &'static str {
        match self {
            CellLabel::Wall => "walls",
            CellLabel::Free => "free space",
            CellLabel::Goal => "goals",
            CellLabel::Start => "start",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        for label in CellLabel::ALL {
            assert_eq!(CellLabel::from_char(label.as_char()), Some(label));
        }
        assert_eq!(CellLabel::from_char('#'), None);
    }
}
