//! Slack client implementation.

use crate::config::SlackConfig;
use crate::error::SlackError;
use crate::transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};
use serde_json::Value;
use std::time::Duration;

/// HTTP status Slack uses for successful calls
const STATUS_OK: u16 = 200;

/// HTTP status Slack uses for rate-limited calls
const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Suspends the calling thread between attempts
pub type Sleeper = Box<dyn Fn(Duration)>;

/// Synchronous Slack Web API client
pub struct SlackClient<T: Transport = ReqwestTransport> {
    config: SlackConfig,
    transport: T,
    sleeper: Sleeper,
}

impl SlackClient<ReqwestTransport> {
    /// Create a client backed by a blocking reqwest transport
    pub fn new(config: SlackConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> SlackClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(config: SlackConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            sleeper: Box::new(std::thread::sleep),
        }
    }

    /// Replace the function used to wait between attempts
    pub fn with_sleeper(mut self, sleeper: impl Fn(Duration) + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform an API call
    ///
    /// Returns `Ok(Some(body))` when Slack answered `ok: true`, and `Ok(None)`
    /// for any other non-fatal outcome (Slack-level errors, unexpected HTTP
    /// statuses). A `429` is retried once per occurrence after sleeping for the
    /// `Retry-After` delay; the first attempt waits the configured fixed delay.
    ///
    /// # Errors
    ///
    /// - [`SlackError::NotAuthed`] when Slack answers `not_authed`
    /// - [`SlackError::RateLimited`] when the retry cap is exceeded
    /// - [`SlackError::InvalidRetryAfter`] for a 429 without a usable delay
    /// - transport and parse failures, which are never retried
    pub fn call(&self, request: &ApiRequest) -> Result<Option<Value>, SlackError> {
        let url = format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            request.endpoint
        );
        let token = self.config.token(request.as_bot);

        let mut delay = self.config.request_delay();
        let mut retries: u32 = 0;

        loop {
            if !delay.is_zero() {
                (self.sleeper)(delay);
            }

            tracing::debug!(endpoint = %request.endpoint, as_bot = request.as_bot, "Calling Slack API");
            let response = self.transport.send(&url, token, request)?;

            if response.status == STATUS_TOO_MANY_REQUESTS {
                if let Some(max) = self.config.max_rate_limit_retries {
                    if retries >= max {
                        return Err(SlackError::RateLimited {
                            endpoint: request.endpoint.clone(),
                            retries,
                        });
                    }
                }
                retries += 1;
                delay = retry_after(&request.endpoint, &response)?;
                tracing::warn!(
                    endpoint = %request.endpoint,
                    delay_ms = delay.as_millis() as u64,
                    retries,
                    "Rate limited by Slack, retrying"
                );
                continue;
            }

            return self.interpret(request, response);
        }
    }

    /// Decide what a non-429 response means
    fn interpret(&self, request: &ApiRequest, response: RawResponse) -> Result<Option<Value>, SlackError> {
        if response.status != STATUS_OK {
            tracing::debug!(
                endpoint = %request.endpoint,
                status = response.status,
                "Slack API returned unexpected status"
            );
            return Ok(None);
        }

        let body: Value = serde_json::from_str(&response.body)?;

        if body.get("error").and_then(Value::as_str) == Some("not_authed") {
            tracing::error!(
                "Need to setup auth. eg, SLACK_TOKEN=<secret token> BOT_SLACK_TOKEN=<bot token> channel-reaper"
            );
            return Err(SlackError::NotAuthed);
        }

        if body.get("ok").and_then(Value::as_bool) == Some(true) {
            return Ok(Some(body));
        }

        let error = body.get("error").and_then(Value::as_str).unwrap_or("unknown");
        tracing::debug!(
            endpoint = %request.endpoint,
            error,
            "Slack API call was not ok"
        );
        Ok(None)
    }
}

/// Parse the `Retry-After` header of a 429 response
fn retry_after(endpoint: &str, response: &RawResponse) -> Result<Duration, SlackError> {
    response
        .retry_after
        .as_deref()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| SlackError::InvalidRetryAfter {
            endpoint: endpoint.to_string(),
            value: response.retry_after.clone(),
        })
}
