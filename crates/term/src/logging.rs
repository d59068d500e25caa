//! Log subscriber setup.
//!
//! The terminal belongs to the renderer, so logs never go to stdout/stderr:
//! they are appended to `MAZE_LOG_PATH` when set, and dropped otherwise.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::MazeConfig;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &MazeConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_a_path() {
        let cfg = MazeConfig::default();
        assert!(!init(&cfg).unwrap());
    }

    #[test]
    fn test_unopenable_path_is_an_error() {
        let cfg = MazeConfig {
            log_path: Some("/nonexistent-dir/for/maze.log".to_string()),
            ..MazeConfig::default()
        };
        let err = init(&cfg).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
