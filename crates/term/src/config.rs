//! Host configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MAZE_WIDTH` | 10 | Maze columns |
//! | `MAZE_HEIGHT` | 10 | Maze rows |
//! | `MAZE_SEED` | clock-derived | RNG seed |
//! | `MAZE_POLICY` | `constrained` | `constrained` or `unconstrained` |
//! | `MAZE_STEP_MS` | 20 | Pause after each tile in interactive mode |
//! | `MAZE_LINGER_MS` | 3000 | How long the finished maze stays on screen |
//! | `MAZE_BATCH` | unset | `1`/`true`: print the finished maze once, no animation |
//! | `MAZE_LOG_PATH` | unset | Append logs to this file (logging is off when unset) |
//! | `MAZE_LOG` | `info` | `tracing` filter directive |
//!
//! Unparseable values fall back to the default.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::GenerationPolicy;
use crate::types::{DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub policy: GenerationPolicy,
    pub step: Duration,
    pub linger: Duration,
    pub batch: bool,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAZE_WIDTH,
            height: DEFAULT_MAZE_HEIGHT,
            seed: 1,
            policy: GenerationPolicy::Constrained,
            step: Duration::from_millis(20),
            linger: Duration::from_millis(3000),
            batch: false,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl MazeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (environment, test fixture, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let width = parsed("MAZE_WIDTH")
            .map(|v| v as usize)
            .unwrap_or(defaults.width);
        let height = parsed("MAZE_HEIGHT")
            .map(|v| v as usize)
            .unwrap_or(defaults.height);
        let seed = parsed("MAZE_SEED").unwrap_or_else(clock_seed);

        let policy = lookup("MAZE_POLICY")
            .and_then(|s| GenerationPolicy::from_str(s.trim()))
            .unwrap_or(defaults.policy);

        let step = parsed("MAZE_STEP_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.step);
        let linger = parsed("MAZE_LINGER_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.linger);

        let batch = lookup("MAZE_BATCH")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = lookup("MAZE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("MAZE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            width,
            height,
            seed,
            policy,
            step,
            linger,
            batch,
            log_path,
            log_filter,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_every_variable() {
        let cfg = MazeConfig::from_lookup(lookup(&[
            ("MAZE_WIDTH", "4"),
            ("MAZE_HEIGHT", " 7 "),
            ("MAZE_SEED", "99"),
            ("MAZE_POLICY", "Unconstrained"),
            ("MAZE_STEP_MS", "0"),
            ("MAZE_LINGER_MS", "250"),
            ("MAZE_BATCH", "true"),
            ("MAZE_LOG_PATH", "/tmp/maze.log"),
            ("MAZE_LOG", "debug"),
        ]));
        assert_eq!(cfg.width, 4);
        assert_eq!(cfg.height, 7);
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.policy, GenerationPolicy::Unconstrained);
        assert_eq!(cfg.step, Duration::ZERO);
        assert_eq!(cfg.linger, Duration::from_millis(250));
        assert!(cfg.batch);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/maze.log"));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let cfg = MazeConfig::from_lookup(lookup(&[
            ("MAZE_WIDTH", "-3"),
            ("MAZE_POLICY", "spiral"),
            ("MAZE_BATCH", "yes"),
            ("MAZE_LOG_PATH", "  "),
            ("MAZE_SEED", "5"),
        ]));
        let d = MazeConfig::default();
        assert_eq!(cfg.width, d.width);
        assert_eq!(cfg.policy, d.policy);
        assert!(!cfg.batch);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_zero_dimensions_pass_through_for_the_generator_to_reject() {
        let cfg = MazeConfig::from_lookup(lookup(&[("MAZE_WIDTH", "0"), ("MAZE_SEED", "1")]));
        assert_eq!(cfg.width, 0);
    }
}
