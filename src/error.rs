//! Error types for store operations and user input.

use crate::types::TaskId;
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling and structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Task index or identity does not resolve to an active task.
    NotFound,
    /// Input that failed validation (handled by re-prompting).
    InvalidInput,
    /// The user interrupted a prompt.
    InterruptedByUser,
    /// Terminal I/O failed.
    Io,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InterruptedByUser => "INTERRUPTED_BY_USER",
            ErrorCode::Io => "IO",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of an identity-keyed store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),
}

impl TaskError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TaskError::NotFound(_) => ErrorCode::NotFound,
        }
    }
}

/// Failure while reading user input.
#[derive(Debug, Error)]
pub enum PromptError {
    /// End of input or an interrupted read.
    #[error("input interrupted by user")]
    Interrupted,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PromptError::Interrupted => ErrorCode::InterruptedByUser,
            PromptError::Io(_) => ErrorCode::Io,
        }
    }
}

/// Result type for store operations.
pub type TaskResult<T> = std::result::Result<T, TaskError>;
