//! TUI Maze (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof:
//! `tui_maze::{core, term, types}`. The implementation lives in dedicated
//! crates under `crates/`.

pub use tui_maze_core as core;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
