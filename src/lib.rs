//! Interactive priority-ordered task list.
//!
//! This module exports the core components for testing and integration.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod store;
pub mod terminal;
pub mod types;
