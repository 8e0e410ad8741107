//! CLI error types.

use crate::config::ConfigError;
use adapter_jsonapi::DecodeError;
use bell_core::schedules::ScheduleError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The school data file does not exist.
    #[error("School data file not found: {0}")]
    FileNotFound(String),

    /// A command argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The school data file could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A schedule edit was rejected.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Reading or writing the school data file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising the school data failed.
    #[error("Failed to serialise school data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
