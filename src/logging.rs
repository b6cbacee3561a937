//! Tracing subscriber setup.
//!
//! Logging is off by default so the interactive screen stays clean; the
//! `--log` flag routes events to stdout, stderr or an append-mode file.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Where log events go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stdout,
    Stderr,
    /// Append to a file, without ANSI colors.
    File(PathBuf),
}

impl LogTarget {
    /// Parse a `--log` value: `0`/`off`, `1`/`stdout`, `2`/`stderr`, or a
    /// file name.
    pub fn parse(value: &str) -> Self {
        match value {
            "0" | "off" => LogTarget::Off,
            "1" | "stdout" => LogTarget::Stdout,
            "2" | "stderr" => LogTarget::Stderr,
            filename => LogTarget::File(PathBuf::from(filename)),
        }
    }
}

/// Maximum level for the given verbosity.
pub fn max_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Install the global subscriber for `target`.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let level = max_level(verbose);
    match target {
        LogTarget::Off => {}
        LogTarget::Stdout => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::Stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}
