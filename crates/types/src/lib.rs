//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the maze workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (generation, tile rendering, terminal host).
//!
//! # Tile Geometry
//!
//! Every maze cell is drawn as a square block of pixels:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SIZE` | 10 | Tile edge length in pixels |
//! | `WALL_THICKNESS` | 2 | Border rows/columns painted for a closed side |
//! | `DEFAULT_MAZE_WIDTH` | 10 | Default maze columns |
//! | `DEFAULT_MAZE_HEIGHT` | 10 | Default maze rows |
//!
//! # Palette
//!
//! | Classification | Color |
//! |----------------|-------|
//! | `Wall` | (30, 30, 30, 255) |
//! | `Empty` | (30, 30, 30, 255) |
//! | `Floor` | (200, 200, 200, 255) |
//! | unrecognized code | (0, 0, 0, 255) |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Sides, WallSide, TILE_SIZE};
//!
//! // A corridor running north to south
//! let open = Sides::from_sides(&[WallSide::North, WallSide::South]);
//! assert!(open.contains(WallSide::North));
//! assert!(!open.contains(WallSide::East));
//!
//! // The closed sides are the complement
//! let closed = open.complement();
//! assert_eq!(closed, Sides::from_sides(&[WallSide::East, WallSide::West]));
//!
//! // Parse a side (case-insensitive)
//! assert_eq!(WallSide::from_str("w"), Some(WallSide::West));
//!
//! assert_eq!(TILE_SIZE, 10);
//! ```

/// Tile edge length in pixels (10x10 tiles)
pub const TILE_SIZE: usize = 10;

/// Number of border rows/columns painted as wall for each closed side
pub const WALL_THICKNESS: usize = 2;

/// Default maze width in cells
pub const DEFAULT_MAZE_WIDTH: usize = 10;

/// Default maze height in cells
pub const DEFAULT_MAZE_HEIGHT: usize = 10;

/// Group id stamped on every generated cell.
///
/// Carried as opaque metadata; no generation rule reads it.
pub const DEFAULT_GROUP_ID: u32 = 1;

/// Dark gray used for walls and uninitialized pixels
pub const WALL_COLOR: Rgba = Rgba::new(30, 30, 30, 255);

/// Light gray used for floor pixels
pub const FLOOR_COLOR: Rgba = Rgba::new(200, 200, 200, 255);

/// Opaque black returned for classification codes that do not map to a [`TileElement`]
pub const UNKNOWN_COLOR: Rgba = Rgba::new(0, 0, 0, 255);


/// A cardinal side of a cell, or the absence of one
///
/// - **None**: No side (used as a neutral value)
/// - **North**: Top edge
/// - **East**: Right edge
/// - **South**: Bottom edge
/// - **West**: Left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WallSide {
    #[default]
    None,
    North,
    East,
    South,
    West,
}

impl WallSide {
    /// The four cardinal sides in clockwise order starting at north
    pub const CARDINALS: [WallSide; 4] = [
        WallSide::North,
        WallSide::East,
        WallSide::South,
        WallSide::West,
    ];

    /// Side facing this one across a shared edge
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::WallSide;
    ///
    /// assert_eq!(WallSide::North.opposite(), WallSide::South);
    /// assert_eq!(WallSide::East.opposite(), WallSide::West);
    /// assert_eq!(WallSide::None.opposite(), WallSide::None);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            WallSide::None => WallSide::None,
            WallSide::North => WallSide::South,
            WallSide::East => WallSide::West,
            WallSide::South => WallSide::North,
            WallSide::West => WallSide::East,
        }
    }

    /// Parse side from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w", "none"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(WallSide::None),
            "north" | "n" => Some(WallSide::North),
            "east" | "e" => Some(WallSide::East),
            "south" | "s" => Some(WallSide::South),
            "west" | "w" => Some(WallSide::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            WallSide::None => "none",
            WallSide::North => "north",
            WallSide::East => "east",
            WallSide::South => "south",
            WallSide::West => "west",
        }
    }

    #[inline(always)]
    fn bit(&self) -> u8 {
        match self {
            WallSide::None => 0,
            WallSide::North => 1 << 0,
            WallSide::East => 1 << 1,
            WallSide::South => 1 << 2,
            WallSide::West => 1 << 3,
        }
    }
}

/// A set of cardinal sides stored as a 4-bit mask
///
/// Used for a cell's open sides (passable, not walled). `WallSide::None`
/// is never a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides(u8);

impl Sides {
    const MASK: u8 = 0b1111;

    /// Set with no sides
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set with all four cardinal sides
    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// Build a set from a slice of sides (`None` entries are ignored)
    pub fn from_sides(sides: &[WallSide]) -> Self {
        let mut set = Self::empty();
        for side in sides {
            set.insert(*side);
        }
        set
    }

    pub fn insert(&mut self, side: WallSide) {
        self.0 |= side.bit();
    }

    pub fn remove(&mut self, side: WallSide) {
        self.0 &= !side.bit();
    }

    pub fn contains(&self, side: WallSide) -> bool {
        let bit = side.bit();
        bit != 0 && self.0 & bit != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cardinal sides not in this set
    pub fn complement(&self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    /// True if every side of `self` is also in `other`
    pub fn is_subset(&self, other: Sides) -> bool {
        self.0 & !other.0 == 0
    }

    /// True if `self` and `other` share at least one side
    pub fn intersects(&self, other: Sides) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate members in clockwise order starting at north
    pub fn iter(&self) -> impl Iterator<Item = WallSide> + '_ {
        WallSide::CARDINALS
            .into_iter()
            .filter(move |side| self.contains(*side))
    }
}

/// Per-pixel classification inside a tile
///
/// - **Wall**: part of a closed side's border
/// - **Floor**: walkable interior
/// - **Empty**: default value for an uninitialized tile; never produced by layout derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileElement {
    Wall,
    Floor,
    #[default]
    Empty,
}

impl TileElement {
    /// Parse a raw classification code (0 = empty, 1 = wall, 2 = floor)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileElement::Empty),
            1 => Some(TileElement::Wall),
            2 => Some(TileElement::Floor),
            _ => None,
        }
    }

    /// Raw classification code
    pub fn code(&self) -> u8 {
        match self {
            TileElement::Empty => 0,
            TileElement::Wall => 1,
            TileElement::Floor => 2,
        }
    }
}

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in buffer order
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Position of a cell in the maze grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub column: usize,
    pub row: usize,
}

impl GridPos {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}
