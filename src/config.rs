//! Runtime configuration.
//!
//! Every option is a command line flag with an environment variable fallback:
//!
//! - `--seed` / `BLOCKFALL_SEED`: RNG seed (default: derived from the clock)
//! - `--gravity-ms` / `BLOCKFALL_GRAVITY_MS`: gravity period, at least 1 (default 500)
//! - `--log-path` / `BLOCKFALL_LOG_PATH`: log file (default: no logging)
//! - `--log-level` / `BLOCKFALL_LOG_LEVEL`: trace, debug, info, warn or error
//! - `--autostart`: begin with gravity running

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::Level;

use crate::types::GRAVITY_MS;

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    /// Seed for piece selection
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Milliseconds between gravity steps
    #[arg(
        long,
        env = "BLOCKFALL_GRAVITY_MS",
        default_value_t = GRAVITY_MS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub gravity_ms: u32,

    /// Append logs to this file; logging is off without it
    #[arg(long, env = "BLOCKFALL_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, env = "BLOCKFALL_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    /// Start with gravity running instead of waiting for the start key
    #[arg(long)]
    pub autostart: bool,
}

impl Config {
    /// The configured seed, or one derived from the current time.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_ms: GRAVITY_MS,
            log_path: None,
            log_level: Level::INFO,
            autostart: false,
        }
    }
}
