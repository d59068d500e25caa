//! Error type for maze generation.

use std::fmt;

use crate::types::GridPos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    // Width or height was zero
    InvalidDimensions { width: usize, height: usize },
    // Neither the corridor set nor the fallback set had a tile satisfying the
    // neighbor constraints; an internal invariant was broken
    NoValidConfiguration { position: GridPos },
    // The corridor table does not cover exactly the 2-of-4 open side combinations
    InvalidCorridorSet,
    // A builder was finished before every cell was decided
    Incomplete { decided: usize, total: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {}x{}", width, height)
            }
            Self::NoValidConfiguration { position } => write!(
                f,
                "no tile configuration satisfies neighbors of cell ({}, {})",
                position.column, position.row
            ),
            Self::InvalidCorridorSet => {
                write!(f, "corridor table does not cover the two-open-side layouts")
            }
            Self::Incomplete { decided, total } => {
                write!(f, "maze incomplete: {}/{} cells decided", decided, total)
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_values() {
        let e = MazeError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(e.to_string(), "invalid maze dimensions 0x4");

        let e = MazeError::NoValidConfiguration {
            position: GridPos::new(3, 7),
        };
        assert!(e.to_string().contains("(3, 7)"));

        let e = MazeError::Incomplete {
            decided: 5,
            total: 9,
        };
        assert!(e.to_string().contains("5/9"));
    }
}
