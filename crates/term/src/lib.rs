//! Terminal host for the maze renderer.
//!
//! This is the platform side of the maze: the core paints tiles into a
//! [`PixelSink`](crate::core::PixelSink), and this crate turns those pixels
//! into terminal output. It avoids widget toolkits and renders into a simple
//! framebuffer that is diffed and flushed with crossterm.
//!
//! - [`fb`]: colored cell framebuffer
//! - [`pixel_view`]: RGBA pixels → half-block terminal cells
//! - [`renderer`]: full/diff encoding and the terminal session
//! - [`sink`]: [`TerminalSink`], the pixel sink shown on screen
//! - [`animate`]: paced, cancellable incremental generation
//! - [`config`] / [`logging`]: environment config and log setup

pub mod animate;
pub mod config;
pub mod fb;
pub mod logging;
pub mod pixel_view;
pub mod renderer;
pub mod sink;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use animate::animate;
pub use config::MazeConfig;
pub use fb::{Cell, FrameBuffer, Rgb};
pub use pixel_view::{AnchorY, PixelView, Viewport};
pub use renderer::{encode_diff_into, encode_frame_into, encode_full_into, write_frame, TerminalRenderer};
pub use sink::TerminalSink;
