//! Paced incremental rendering.
//!
//! Drives a [`MazeBuilder`] one cell at a time: decide, paint the tile, flush,
//! then suspend for `step` so a human can watch the maze grow. The generator
//! itself never waits; pacing only exists here.

use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::core::{paint_cell, Maze, MazeBuilder, PixelSink};

/// Run `builder` to completion, flushing `sink` after every decided cell.
///
/// With a zero `step` the task still yields between cells so that a
/// concurrent Ctrl-C handler gets a chance to run. Dropping the returned
/// future abandons the partial maze.
pub async fn animate<R, S>(mut builder: MazeBuilder<R>, sink: &mut S, step: Duration) -> Result<Maze>
where
    R: Rng,
    S: PixelSink,
    S::Error: Into<anyhow::Error>,
{
    while let Some(cell) = builder.step()? {
        paint_cell(&cell, sink);
        sink.flush().map_err(Into::<anyhow::Error>::into)?;
        debug!(
            decided = builder.decided(),
            total = builder.total(),
            "tile flushed"
        );

        if step.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(step).await;
        }
    }
    Ok(builder.finish()?)
}
