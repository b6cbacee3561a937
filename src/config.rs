//! Configuration loading and management.
//!
//! Precedence, lowest to highest: built-in defaults, the YAML file named by
//! `--config`, then individual command-line flags.

use crate::cli::Cli;
use crate::session::SessionOptions;
use crate::types::{DEFAULT_PRIORITY, Priority};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Task defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Priority offered at the add prompt when the user just hits Enter.
    #[serde(default = "default_priority")]
    pub default_priority: Priority,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
        }
    }
}

fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

/// Terminal presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Style output with ANSI colors.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Clear the screen before each menu redraw.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse configuration from YAML text. Blank input yields defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Render the effective configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load configuration from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(priority) = cli.default_priority {
            self.tasks.default_priority = priority;
        }
        if cli.no_color {
            self.ui.color = false;
        }
        if cli.no_clear {
            self.ui.clear_screen = false;
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            default_priority: self.tasks.default_priority,
            clear_screen: self.ui.clear_screen,
        }
    }
}
