//! Terminal maze runner (default binary).
//!
//! Generates a maze and draws it tile by tile into the terminal, pausing
//! `MAZE_STEP_MS` between tiles. With `MAZE_BATCH=1` the maze is generated
//! without pacing and printed once. See `tui_maze::term::config` for every
//! setting.

use anyhow::Result;
use tracing::{info, warn};

use tui_maze::core::{
    paint_maze, paint_rgba, surface_size, Maze, MazeGenerator, PixelBuffer, SeededBuilder,
};
use tui_maze::term::{animate, logging, write_frame, MazeConfig, PixelView, TerminalSink};
use tui_maze::types::TILE_SIZE;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = MazeConfig::from_env();
    logging::init(&config)?;
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        policy = config.policy.as_str(),
        batch = config.batch,
        "starting"
    );

    if config.batch {
        return run_batch(&config);
    }

    // Reject bad dimensions before taking over the screen.
    let builder = SeededBuilder::seeded(config.width, config.height, config.policy, config.seed)?;

    let mut sink = TerminalSink::stdout(config.width * TILE_SIZE, config.height * TILE_SIZE);
    sink.enter()?;

    let result = run_interactive(&config, builder, &mut sink).await;

    // Always try to restore terminal state.
    let _ = sink.exit();
    result
}

async fn run_interactive(
    config: &MazeConfig,
    builder: SeededBuilder,
    sink: &mut TerminalSink,
) -> Result<()> {
    sink.set_status(status_line(config, "generating"));

    let maze = tokio::select! {
        maze = animate(builder, &mut *sink, config.step) => maze?,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted during generation");
            return Ok(());
        }
    };

    report(&maze);
    sink.set_status(status_line(config, "done"));
    paint_maze(&maze, sink)?;

    tokio::select! {
        _ = tokio::time::sleep(config.linger) => {}
        _ = tokio::signal::ctrl_c() => info!("interrupted while lingering"),
    }
    Ok(())
}

fn run_batch(config: &MazeConfig) -> Result<()> {
    let maze = MazeGenerator::new(config.policy, config.seed).generate(config.width, config.height)?;
    report(&maze);

    let (w, h) = surface_size(&maze);
    let mut pixels = PixelBuffer::new(w, h);
    for cell in maze.cells() {
        paint_rgba(&cell.layout(), cell.position(), pixels.data_mut(), w);
    }

    let mut view = PixelView::default();
    view.set_status(status_line(config, "done"));
    let fb = view.render_fit(&pixels);
    write_frame(&fb, &mut std::io::stdout().lock())
}

fn report(maze: &Maze) {
    let edges = maze.edge_violations();
    let boundary = maze.boundary_violations();
    if edges.is_empty() && boundary.is_empty() {
        info!(cells = maze.len(), "maze consistent");
    } else {
        warn!(
            cells = maze.len(),
            edge_violations = edges.len(),
            boundary_violations = boundary.len(),
            "maze has mismatched walls"
        );
    }
}

fn status_line(config: &MazeConfig, phase: &str) -> String {
    format!(
        "{}x{} {} seed={} {}",
        config.width,
        config.height,
        config.policy.as_str(),
        config.seed,
        phase
    )
}
