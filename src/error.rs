//! Error types for runalone.
//!
//! Uses thiserror for derive macros. Every variant here is fatal: the guard
//! reports it and terminates before any lock logic runs.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for runalone operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunAloneError {
    /// Setup options contained keys the guard does not understand.
    #[error("don't know what to do with: {}", .0.join(" "))]
    UnknownOptions(Vec<String>),

    /// A retry schedule was not of the form `N` or `N,M`.
    #[error("invalid retry schedule '{0}': expected \"N\" or \"N,M\" with non-negative integers")]
    InvalidRetry(String),

    /// The CLI config file could not be read or parsed.
    #[error("invalid config file: {0}")]
    InvalidConfigFile(String),

    /// The wrapped command could not be started.
    #[error("failed to run command: {0}")]
    CommandFailed(String),
}

impl RunAloneError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunAloneError::UnknownOptions(_) => exit_codes::CONFIG_ERROR,
            RunAloneError::InvalidRetry(_) => exit_codes::CONFIG_ERROR,
            RunAloneError::InvalidConfigFile(_) => exit_codes::CONFIG_ERROR,
            RunAloneError::CommandFailed(_) => exit_codes::COMMAND_NOT_STARTED,
        }
    }
}

/// Result type alias for runalone operations.
pub type Result<T> = std::result::Result<T, RunAloneError>;
