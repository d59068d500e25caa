//! Corridor module - the closed set of tile configurations
//!
//! Generation picks each cell's open sides from a fixed table rather than from
//! arbitrary side sets:
//!
//! - **Corridors**: the six configurations with exactly two open sides
//!   (straight N-S / E-W, and the four turns)
//! - **Fallbacks**: four dead ends (one open side) and the enclosed tile (no
//!   open side), only used when no corridor fits the neighbor constraints
//!
//! [`SideConstraints`] captures what already-decided neighbors and the grid
//! boundary demand of a cell, and filters the table.

use arrayvec::ArrayVec;

use crate::error::MazeError;
use crate::types::{Sides, WallSide};

/// Two-open-side tile configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corridor {
    NorthSouth,
    EastWest,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Corridor {
    pub const ALL: [Corridor; 6] = [
        Corridor::NorthSouth,
        Corridor::EastWest,
        Corridor::NorthEast,
        Corridor::NorthWest,
        Corridor::SouthEast,
        Corridor::SouthWest,
    ];

    pub fn open_sides(&self) -> Sides {
        let pair = match self {
            Corridor::NorthSouth => [WallSide::North, WallSide::South],
            Corridor::EastWest => [WallSide::East, WallSide::West],
            Corridor::NorthEast => [WallSide::North, WallSide::East],
            Corridor::NorthWest => [WallSide::North, WallSide::West],
            Corridor::SouthEast => [WallSide::South, WallSide::East],
            Corridor::SouthWest => [WallSide::South, WallSide::West],
        };
        Sides::from_sides(&pair)
    }
}

/// Any tile configuration the generator can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    Corridor(Corridor),
    /// One open side
    DeadEnd(WallSide),
    /// No open side
    Enclosed,
}

impl Configuration {
    /// Configurations tried when no corridor satisfies the constraints
    pub const FALLBACKS: [Configuration; 5] = [
        Configuration::DeadEnd(WallSide::North),
        Configuration::DeadEnd(WallSide::East),
        Configuration::DeadEnd(WallSide::South),
        Configuration::DeadEnd(WallSide::West),
        Configuration::Enclosed,
    ];

    pub fn open_sides(&self) -> Sides {
        match self {
            Configuration::Corridor(c) => c.open_sides(),
            Configuration::DeadEnd(side) => Sides::from_sides(&[*side]),
            Configuration::Enclosed => Sides::empty(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, Configuration::Corridor(_))
    }
}

/// Check that `corridors` is exactly the set of 2-of-4 open side combinations.
pub fn validate_corridors(corridors: &[Corridor]) -> Result<(), MazeError> {
    let mut seen: ArrayVec<Sides, 6> = ArrayVec::new();
    for c in corridors {
        let open = c.open_sides();
        if open.len() != 2 || seen.contains(&open) {
            return Err(MazeError::InvalidCorridorSet);
        }
        if seen.try_push(open).is_err() {
            return Err(MazeError::InvalidCorridorSet);
        }
    }
    // C(4, 2)
    if seen.len() != 6 {
        return Err(MazeError::InvalidCorridorSet);
    }
    Ok(())
}

/// Validate the built-in corridor table
pub fn validate_corridor_set() -> Result<(), MazeError> {
    validate_corridors(&Corridor::ALL)
}

/// What a cell's neighbors (or the grid edge) demand of one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Constraint {
    /// Neighbor not decided yet
    #[default]
    Undetermined,
    /// Neighbor closed the shared edge, or there is no neighbor
    MustClose,
    /// Neighbor opened the shared edge
    MustOpen,
}

/// Constraints for the four cardinal sides of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideConstraints {
    north: Constraint,
    east: Constraint,
    south: Constraint,
    west: Constraint,
}

impl SideConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: WallSide) -> Constraint {
        match side {
            WallSide::None => Constraint::Undetermined,
            WallSide::North => self.north,
            WallSide::East => self.east,
            WallSide::South => self.south,
            WallSide::West => self.west,
        }
    }

    pub fn set(&mut self, side: WallSide, constraint: Constraint) {
        match side {
            WallSide::None => {}
            WallSide::North => self.north = constraint,
            WallSide::East => self.east = constraint,
            WallSide::South => self.south = constraint,
            WallSide::West => self.west = constraint,
        }
    }

    /// Constraint mirroring a decided neighbor's side that faces this cell
    pub fn from_neighbor(neighbor_open: Sides, facing: WallSide) -> Constraint {
        if neighbor_open.contains(facing) {
            Constraint::MustOpen
        } else {
            Constraint::MustClose
        }
    }

    fn sides_with(&self, constraint: Constraint) -> Sides {
        let mut sides = Sides::empty();
        for side in WallSide::CARDINALS {
            if self.get(side) == constraint {
                sides.insert(side);
            }
        }
        sides
    }

    /// Sides that must stay walled
    pub fn must_close(&self) -> Sides {
        self.sides_with(Constraint::MustClose)
    }

    /// Sides that must be open
    pub fn must_open(&self) -> Sides {
        self.sides_with(Constraint::MustOpen)
    }

    /// True if `open` opens no `MustClose` side and opens every `MustOpen` side
    pub fn allows(&self, open: Sides) -> bool {
        !open.intersects(self.must_close()) && self.must_open().is_subset(open)
    }

    /// Corridors satisfying the constraints, in table order
    pub fn valid_corridors(&self) -> ArrayVec<Configuration, 6> {
        Corridor::ALL
            .iter()
            .filter(|c| self.allows(c.open_sides()))
            .map(|c| Configuration::Corridor(*c))
            .collect()
    }

    /// Fallback configurations satisfying the constraints, in table order
    pub fn valid_fallbacks(&self) -> ArrayVec<Configuration, 5> {
        Configuration::FALLBACKS
            .iter()
            .filter(|c| self.allows(c.open_sides()))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corridor_table_covers_every_pair() {
        assert!(validate_corridor_set().is_ok());
        for c in Corridor::ALL {
            assert_eq!(c.open_sides().len(), 2);
        }
    }

    #[test]
    fn test_duplicate_or_missing_corridors_are_rejected() {
        let dup = [
            Corridor::NorthSouth,
            Corridor::NorthSouth,
            Corridor::NorthEast,
            Corridor::NorthWest,
            Corridor::SouthEast,
            Corridor::SouthWest,
        ];
        assert_eq!(validate_corridors(&dup), Err(MazeError::InvalidCorridorSet));
        assert_eq!(
            validate_corridors(&Corridor::ALL[..5]),
            Err(MazeError::InvalidCorridorSet)
        );
    }

    #[test]
    fn test_unconstrained_cell_accepts_all_corridors() {
        let c = SideConstraints::new();
        assert_eq!(c.valid_corridors().len(), 6);
    }

    #[test]
    fn test_must_close_sides_are_never_opened() {
        let mut c = SideConstraints::new();
        c.set(WallSide::North, Constraint::MustClose);
        c.set(WallSide::West, Constraint::MustClose);
        let valid = c.valid_corridors();
        assert_eq!(
            valid.as_slice(),
            &[Configuration::Corridor(Corridor::SouthEast)]
        );
    }

    #[test]
    fn test_must_open_sides_are_always_opened() {
        let mut c = SideConstraints::new();
        c.set(WallSide::West, Constraint::MustOpen);
        c.set(WallSide::North, Constraint::MustClose);
        let valid = c.valid_corridors();
        assert_eq!(
            valid.as_slice(),
            &[
                Configuration::Corridor(Corridor::EastWest),
                Configuration::Corridor(Corridor::SouthWest)
            ]
        );
    }

    #[test]
    fn test_boxed_in_cell_falls_back_to_enclosed() {
        let mut c = SideConstraints::new();
        for side in WallSide::CARDINALS {
            c.set(side, Constraint::MustClose);
        }
        assert!(c.valid_corridors().is_empty());
        assert_eq!(c.valid_fallbacks().as_slice(), &[Configuration::Enclosed]);
    }

    #[test]
    fn test_corner_with_one_entry_falls_back_to_dead_end() {
        let mut c = SideConstraints::new();
        c.set(WallSide::West, Constraint::MustOpen);
        c.set(WallSide::North, Constraint::MustClose);
        c.set(WallSide::East, Constraint::MustClose);
        c.set(WallSide::South, Constraint::MustClose);
        assert!(c.valid_corridors().is_empty());
        assert_eq!(
            c.valid_fallbacks().as_slice(),
            &[Configuration::DeadEnd(WallSide::West)]
        );
    }

    #[test]
    fn test_none_side_is_ignored() {
        let mut c = SideConstraints::new();
        c.set(WallSide::None, Constraint::MustClose);
        assert_eq!(c, SideConstraints::new());
        assert_eq!(c.get(WallSide::None), Constraint::Undetermined);
    }

    #[test]
    fn test_fallback_flag() {
        assert!(!Configuration::Corridor(Corridor::EastWest).is_fallback());
        assert!(Configuration::Enclosed.is_fallback());
        assert_eq!(Configuration::Enclosed.open_sides(), Sides::empty());
    }
}
