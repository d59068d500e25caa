//! Core maze logic - pure, deterministic, and testable
//!
//! This crate contains the maze generation algorithm and the tile renderer.
//! It has **zero dependencies** on UI, terminal, or I/O:
//!
//! - **Deterministic**: the same seed produces the same maze
//! - **Incremental**: cells are decided one at a time and can be rendered as they land
//! - **Headless**: pacing and screen output live in the caller, behind [`PixelSink`]
//!
//! # Module Structure
//!
//! - [`tile`]: cell open sides → 10x10 pixel layout, palette, painting
//! - [`corridor`]: the fixed table of tile configurations and neighbor constraints
//! - [`generator`]: row-major generation under the constrained or unconstrained policy
//! - [`maze`]: the finished grid, plus shared-edge and boundary checks
//! - [`sink`]: the write-only pixel surface and an in-memory RGBA buffer
//! - [`error`]: [`MazeError`]
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{paint_maze, surface_size, GenerationPolicy, MazeGenerator, PixelBuffer};
//!
//! let mut generator = MazeGenerator::new(GenerationPolicy::Constrained, 12345);
//! let maze = generator.generate(10, 10).unwrap();
//!
//! // Neighbors agree on every shared edge and the outer wall is closed
//! assert!(maze.is_consistent());
//!
//! let (w, h) = surface_size(&maze);
//! let mut pixels = PixelBuffer::new(w, h);
//! paint_maze(&maze, &mut pixels).unwrap();
//! assert_eq!(pixels.flush_count(), 1);
//! ```

pub mod corridor;
pub mod error;
pub mod generator;
pub mod maze;
pub mod sink;
pub mod tile;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use corridor::{validate_corridor_set, Configuration, Constraint, Corridor, SideConstraints};
pub use error::MazeError;
pub use generator::{GenerationPolicy, MazeBuilder, MazeGenerator, SeededBuilder};
pub use maze::{BoundaryViolation, Cell, EdgeViolation, Maze};
pub use sink::{pixel_offset, PixelBuffer, PixelSink};
pub use tile::{
    color_for, color_for_code, layout_for, paint, paint_cell, paint_maze, paint_rgba,
    surface_size, TileLayout,
};
