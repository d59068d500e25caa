//! Generator module - decides every cell's open sides, one cell at a time
//!
//! Cells are decided in row-major order (rows top to bottom, columns left to
//! right), so a cell's west and north neighbors are always decided before it.
//!
//! # Policies
//!
//! - [`GenerationPolicy::Constrained`]: each cell picks uniformly among the
//!   corridors that agree with its decided neighbors and keep the outer
//!   boundary closed. When no corridor fits (corners, 1-wide mazes), it picks
//!   among the dead-end/enclosed fallbacks under the same rule. Every shared
//!   edge ends up open on both sides or closed on both sides.
//! - [`GenerationPolicy::Unconstrained`]: each cell picks any corridor
//!   uniformly. Neighbors may disagree and the boundary may be open.
//!
//! # Incremental generation
//!
//! [`MazeBuilder`] exposes the decision loop as a state machine: each
//! [`MazeBuilder::step`] decides exactly one cell, and the builder becomes
//! complete after the bottom-right cell. Callers that want to pace rendering
//! drive the builder themselves; [`MazeGenerator::generate_incremental`] runs it
//! to completion with a per-cell callback and no pacing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::corridor::{validate_corridor_set, Configuration, Constraint, Corridor, SideConstraints};
use crate::error::MazeError;
use crate::maze::{Cell, Maze};
use crate::sink::CHANNELS;
use crate::types::{GridPos, WallSide, DEFAULT_GROUP_ID, TILE_SIZE};

/// How a cell's configuration is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationPolicy {
    /// Agree with decided neighbors and keep the boundary closed
    #[default]
    Constrained,
    /// Uniform corridor per cell, no consistency
    Unconstrained,
}

impl GenerationPolicy {
    /// Parse policy from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_core::GenerationPolicy;
    ///
    /// assert_eq!(GenerationPolicy::from_str("constrained"), Some(GenerationPolicy::Constrained));
    /// assert_eq!(GenerationPolicy::from_str("Random"), Some(GenerationPolicy::Unconstrained));
    /// assert_eq!(GenerationPolicy::from_str("bogus"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "constrained" | "b" => Some(GenerationPolicy::Constrained),
            "unconstrained" | "random" | "a" => Some(GenerationPolicy::Unconstrained),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPolicy::Constrained => "constrained",
            GenerationPolicy::Unconstrained => "unconstrained",
        }
    }
}

/// Step-by-step maze construction.
///
/// Building until the last cell is decided, then complete. There is no way to
/// retract a decided cell.
#[derive(Debug, Clone)]
pub struct MazeBuilder<R> {
    width: usize,
    height: usize,
    policy: GenerationPolicy,
    rng: R,
    /// Column-major storage; column `c` holds rows `0..len` decided so far
    columns: Vec<Vec<Cell>>,
    /// Row-major index of the next cell to decide
    next: usize,
}

/// Builder owning a seeded standard RNG
pub type SeededBuilder = MazeBuilder<StdRng>;

impl MazeBuilder<StdRng> {
    /// Builder with its own seeded RNG
    pub fn seeded(
        width: usize,
        height: usize,
        policy: GenerationPolicy,
        seed: u64,
    ) -> Result<Self, MazeError> {
        Self::new(width, height, policy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeBuilder<R> {
    /// Start building a `width x height` maze.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] if either dimension is zero,
    /// or if the painted maze would not fit in addressable memory.
    pub fn new(
        width: usize,
        height: usize,
        policy: GenerationPolicy,
        rng: R,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 || surface_bytes(width, height).is_none() {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        validate_corridor_set()?;

        Ok(Self {
            width,
            height,
            policy,
            rng,
            columns: (0..width).map(|_| Vec::with_capacity(height)).collect(),
            next: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    /// Number of cells decided so far
    pub fn decided(&self) -> usize {
        self.next
    }

    /// Number of cells in the finished maze
    pub fn total(&self) -> usize {
        self.width * self.height
    }

    pub fn is_complete(&self) -> bool {
        self.next >= self.total()
    }

    /// Position the next `step` will decide, or `None` once complete
    pub fn next_position(&self) -> Option<GridPos> {
        if self.is_complete() {
            return None;
        }
        Some(GridPos::new(self.next % self.width, self.next / self.width))
    }

    /// Already-decided cell at (column, row)
    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        self.columns.get(column).and_then(|col| col.get(row))
    }

    /// Decide the next cell.
    ///
    /// Returns `Ok(None)` once the maze is complete.
    pub fn step(&mut self) -> Result<Option<Cell>, MazeError> {
        let Some(position) = self.next_position() else {
            return Ok(None);
        };

        let configuration = match self.policy {
            GenerationPolicy::Constrained => self.choose_constrained(position)?,
            GenerationPolicy::Unconstrained => Corridor::ALL
                .choose(&mut self.rng)
                .map(|c| Configuration::Corridor(*c))
                .ok_or(MazeError::NoValidConfiguration { position })?,
        };

        let cell = Cell::new(configuration.open_sides(), position, DEFAULT_GROUP_ID);
        self.columns[position.column].push(cell);
        self.next += 1;

        debug!(
            column = position.column,
            row = position.row,
            ?configuration,
            "cell decided"
        );
        if self.is_complete() {
            info!(
                width = self.width,
                height = self.height,
                policy = self.policy.as_str(),
                "maze complete"
            );
        }

        Ok(Some(cell))
    }

    /// Run `step` until complete, then hand over the maze
    pub fn run_to_completion(mut self) -> Result<Maze, MazeError> {
        while self.step()?.is_some() {}
        self.finish()
    }

    /// Consume a complete builder into its maze.
    ///
    /// Fails with [`MazeError::Incomplete`] if cells remain undecided.
    pub fn finish(self) -> Result<Maze, MazeError> {
        if !self.is_complete() {
            return Err(MazeError::Incomplete {
                decided: self.decided(),
                total: self.total(),
            });
        }
        Ok(Maze::from_columns(self.width, self.height, self.columns))
    }

    /// Constraints imposed on `position` by decided neighbors and the grid edge
    pub fn constraints_at(&self, position: GridPos) -> SideConstraints {
        let GridPos { column, row } = position;
        let mut c = SideConstraints::new();

        let west = match column.checked_sub(1).and_then(|left| self.cell(left, row)) {
            Some(left) => SideConstraints::from_neighbor(left.open_sides(), WallSide::East),
            None => Constraint::MustClose,
        };
        let north = match row.checked_sub(1).and_then(|up| self.cell(column, up)) {
            Some(up) => SideConstraints::from_neighbor(up.open_sides(), WallSide::South),
            None => Constraint::MustClose,
        };
        c.set(WallSide::West, west);
        c.set(WallSide::North, north);

        // East/south neighbors are decided later; only the grid edge constrains them now.
        if column + 1 == self.width {
            c.set(WallSide::East, Constraint::MustClose);
        }
        if row + 1 == self.height {
            c.set(WallSide::South, Constraint::MustClose);
        }
        c
    }

    fn choose_constrained(&mut self, position: GridPos) -> Result<Configuration, MazeError> {
        let constraints = self.constraints_at(position);

        let corridors = constraints.valid_corridors();
        if let Some(choice) = corridors.choose(&mut self.rng) {
            return Ok(*choice);
        }

        let fallbacks = constraints.valid_fallbacks();
        match fallbacks.choose(&mut self.rng) {
            Some(choice) => {
                warn!(
                    column = position.column,
                    row = position.row,
                    ?choice,
                    "no corridor fits, using fallback tile"
                );
                Ok(*choice)
            }
            None => Err(MazeError::NoValidConfiguration { position }),
        }
    }
}

/// Maze generator with its own random source
#[derive(Debug, Clone)]
pub struct MazeGenerator<R = StdRng> {
    policy: GenerationPolicy,
    rng: R,
}

impl MazeGenerator<StdRng> {
    /// Create a generator with a seeded RNG; the same seed reproduces the same mazes
    pub fn new(policy: GenerationPolicy, seed: u64) -> Self {
        Self::with_rng(policy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn with_rng(policy: GenerationPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    /// Builder drawing from this generator's RNG
    pub fn builder(&mut self, width: usize, height: usize) -> Result<MazeBuilder<&mut R>, MazeError> {
        MazeBuilder::new(width, height, self.policy, &mut self.rng)
    }

    /// Generate a complete maze synchronously
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Maze, MazeError> {
        self.builder(width, height)?.run_to_completion()
    }

    /// Generate a maze, calling `on_cell_ready` right after each cell is decided.
    ///
    /// Cell (c, r) is reported after (c - 1, r) and (c, r - 1). On error no maze
    /// is returned, even if some cells were already reported.
    pub fn generate_incremental<F>(
        &mut self,
        width: usize,
        height: usize,
        mut on_cell_ready: F,
    ) -> Result<Maze, MazeError>
    where
        F: FnMut(&Cell, GridPos),
    {
        let mut builder = self.builder(width, height)?;
        while let Some(cell) = builder.step()? {
            on_cell_ready(&cell, cell.position());
        }
        builder.finish()
    }
}

/// RGBA bytes needed to paint a `width x height` maze, if that fits an allocation
fn surface_bytes(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(TILE_SIZE * TILE_SIZE * CHANNELS)
        .filter(|bytes| *bytes <= isize::MAX as usize)
}
