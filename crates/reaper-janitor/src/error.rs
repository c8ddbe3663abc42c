//! Error types for reaper operations

use thiserror::Error;

/// Errors that can occur during a reaping run
#[derive(Error, Debug)]
pub enum ReaperError {
    /// Workspace platform error (auth, transport, parsing)
    #[error("Workspace API error: {0}")]
    Api(String),

    /// Alert template could not be parsed
    #[error("Template error: {0}")]
    Template(#[from] serde_json::Error),

    /// Report file could not be written
    #[error("Report error: {0}")]
    Report(#[from] std::io::Error),
}
