//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required input file is missing or unreadable
    #[error("Input error: {0}")]
    Input(String),

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),

    /// The reaping run failed
    #[error(transparent)]
    Reaper(#[from] reaper_janitor::ReaperError),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
