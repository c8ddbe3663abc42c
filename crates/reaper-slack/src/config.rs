//! Connection settings for the Slack client

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default Slack Web API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";

/// Settings for [`crate::SlackClient`]
///
/// # Examples
///
/// ```
/// use reaper_slack::SlackConfig;
///
/// let config = SlackConfig::default();
/// assert_eq!(config.api_base_url, "https://slack.com/api");
/// assert!(config.max_rate_limit_retries.is_none());
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Base URL that API method names are appended to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User token, used for listing, history and archiving
    #[serde(default)]
    pub user_token: String,

    /// Bot token, used for posting messages
    #[serde(default)]
    pub bot_token: String,

    /// Fixed delay before every request, in seconds
    /// Default: 0 (no delay)
    #[serde(default)]
    pub request_delay_secs: f64,

    /// Maximum consecutive 429 retries for a single call
    /// Default: none (retry for as long as Slack keeps asking)
    #[serde(default)]
    pub max_rate_limit_retries: Option<u32>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_token: String::new(),
            bot_token: String::new(),
            request_delay_secs: 0.0,
            max_rate_limit_retries: None,
        }
    }
}

impl SlackConfig {
    /// Fixed request delay as a Duration (negative or invalid values mean none)
    pub fn request_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_delay_secs).unwrap_or(Duration::ZERO)
    }

    /// Token to use for a call
    pub fn token(&self, as_bot: bool) -> &str {
        if as_bot {
            &self.bot_token
        } else {
            &self.user_token
        }
    }
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field("api_base_url", &self.api_base_url)
            .field("user_token", &redact(&self.user_token))
            .field("bot_token", &redact(&self.bot_token))
            .field("request_delay_secs", &self.request_delay_secs)
            .field("max_rate_limit_retries", &self.max_rate_limit_retries)
            .finish()
    }
}

fn redact(token: &str) -> &'static str {
    if token.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SlackConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.user_token.is_empty());
        assert_eq!(config.request_delay(), Duration::ZERO);
    }

    #[test]
    fn test_token_selection() {
        let config = SlackConfig {
            user_token: "xoxp-user".to_string(),
            bot_token: "xoxb-bot".to_string(),
            ..Default::default()
        };
        assert_eq!(config.token(false), "xoxp-user");
        assert_eq!(config.token(true), "xoxb-bot");
    }

    #[test]
    fn test_request_delay_conversion() {
        let mut config = SlackConfig {
            request_delay_secs: 1.5,
            ..Default::default()
        };
        assert_eq!(config.request_delay(), Duration::from_millis(1500));

        config.request_delay_secs = -2.0;
        assert_eq!(config.request_delay(), Duration::ZERO);
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = SlackConfig {
            user_token: "xoxp-secret".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("xoxp-secret"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("<unset>"));
    }

    #[test]
    fn test_toml_defaults_fill_missing_fields() {
        let config: SlackConfig = serde_json::from_str(r#"{"user_token": "xoxp-1"}"#).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.user_token, "xoxp-1");
        assert!(config.max_rate_limit_retries.is_none());
    }
}
