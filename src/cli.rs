//! CLI definitions for tasklist.
//!
//! The binary takes no subcommands; flags only tune logging and
//! presentation of the interactive session.

use crate::types::Priority;
use clap::Parser;
use std::path::PathBuf;

/// Interactive priority-ordered task list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off (default), 1/stdout, 2/stderr, or filename
    #[arg(short, long, default_value = "0")]
    pub log: String,

    /// Priority offered by default when adding a task
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    pub default_priority: Option<Priority>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen before redrawing the menu
    #[arg(long)]
    pub no_clear: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["tasklist"]);
        assert_eq!(cli.log, "0");
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.default_priority.is_none());
    }

    #[test]
    fn negative_default_priority() {
        let cli = Cli::parse_from(["tasklist", "-p", "-2", "--log", "stderr", "-v"]);
        assert_eq!(cli.default_priority, Some(-2));
        assert_eq!(cli.log, "stderr");
        assert!(cli.verbose);
    }
}
