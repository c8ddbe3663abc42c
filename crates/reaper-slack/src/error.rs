//! Error types for the Slack client.

use thiserror::Error;

/// Slack client errors
#[derive(Debug, Error)]
pub enum SlackError {
    /// Slack answered `not_authed`: tokens are missing or not configured
    #[error("Not authenticated: set SLACK_TOKEN and BOT_SLACK_TOKEN")]
    NotAuthed,

    /// Gave up after hitting the configured rate-limit retry cap
    #[error("Rate limited on {endpoint} after {retries} retries")]
    RateLimited {
        /// API method that kept answering 429
        endpoint: String,
        /// Number of retries already issued
        retries: u32,
    },

    /// A 429 answer without a usable `Retry-After` header
    #[error("Invalid Retry-After header from {endpoint}: {value:?}")]
    InvalidRetryAfter {
        /// API method that answered 429
        endpoint: String,
        /// Raw header value, if any
        value: Option<String>,
    },

    /// Connection error (network, DNS, TLS, ...)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other HTTP transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A call that must succeed returned no usable response
    #[error("Unexpected empty response from {0}")]
    UnexpectedResponse(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            SlackError::Connection(e.to_string())
        } else if e.is_timeout() {
            SlackError::Connection("Request timeout".to_string())
        } else if e.is_decode() {
            SlackError::Parse(e.to_string())
        } else {
            SlackError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(e: serde_json::Error) -> Self {
        SlackError::Parse(format!("JSON parsing error: {}", e))
    }
}
