//! Slack Web API client for the channel reaper
//!
//! Synchronous client that talks to the Slack Web API and implements the
//! [`reaper_domain::WorkspaceApi`] seam used by the reaper.
//!
//! # Example
//!
//! ```no_run
//! use reaper_domain::WorkspaceApi;
//! use reaper_slack::{SlackClient, SlackConfig};
//!
//! let config = SlackConfig {
//!     user_token: "xoxp-...".to_string(),
//!     bot_token: "xoxb-...".to_string(),
//!     ..Default::default()
//! };
//! let mut client = SlackClient::new(config);
//!
//! let channels = client.list_channels().expect("Failed to list channels");
//! println!("{} channels", channels.len());
//! ```
//!
//! # Rate limiting
//!
//! Every call goes through [`SlackClient::call`]. A `429 Too Many Requests`
//! answer is retried once per occurrence after sleeping for the number of
//! seconds in the `Retry-After` header. There is no retry cap unless
//! [`SlackConfig::max_rate_limit_retries`] sets one.

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod transport;
mod workspace;

pub use client::{SlackClient, Sleeper};
pub use config::{SlackConfig, DEFAULT_API_BASE_URL};
pub use error::SlackError;
pub use transport::{ApiRequest, HttpMethod, RawResponse, ReqwestTransport, Transport};
pub use workspace::{
    ARCHIVE_ENDPOINT, HISTORY_ENDPOINT, HISTORY_PAGE_SIZE, LIST_ENDPOINT, LIST_PAGE_SIZE,
    POST_MESSAGE_ENDPOINT,
};
