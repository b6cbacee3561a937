//! tasklist
//!
//! An interactive terminal task list ordered by priority. All state lives
//! in memory and is discarded on exit.

use anyhow::Result;
use clap::Parser;
use std::io;
use tasklist::cli::Cli;
use tasklist::config::Config;
use tasklist::format;
use tasklist::logging::{self, LogTarget};
use tasklist::prompt::LinePrompt;
use tasklist::session::{Session, SessionEnd};
use tasklist::store::TaskStore;
use tasklist::terminal::TerminalInput;
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    config.apply_cli(&cli);
    let effective = config.to_yaml()?;
    debug!(config = %effective, "Configuration loaded");

    if !config.ui.color {
        format::disable_color();
    }

    let prompt = LinePrompt::new(TerminalInput::spawn()?, io::stdout());
    let mut session = Session::new(
        TaskStore::new(),
        prompt,
        io::stdout(),
        config.session_options(),
    );

    match session.run()? {
        SessionEnd::Exited => info!("Exited"),
        SessionEnd::Interrupted => info!("Terminated by user"),
    }

    Ok(())
}
