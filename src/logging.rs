//! Log setup for the binary.
//!
//! The game owns the terminal, so logs never go to stdout or stderr. When a
//! log path is configured, a `tracing-subscriber` fmt layer appends plain
//! (non-ANSI) lines to that file.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Install the global subscriber. Returns whether logging was enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(LevelFilter::from_level(config.log_level))
        .try_init()
        .context("failed to install log subscriber")?;

    info!(path = %path.display(), level = %config.log_level, "logging initialized");
    Ok(true)
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
