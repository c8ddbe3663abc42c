//! HTTP transport for Slack API calls.

use crate::error::SlackError;
use reqwest::header::RETRY_AFTER;

/// HTTP method of an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters go in the query string
    Get,
    /// Parameters go in a form-encoded body
    Post,
}

/// A single Slack Web API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// API method name (e.g. "conversations.list")
    pub endpoint: String,
    /// Request parameters, in insertion order
    pub params: Vec<(String, String)>,
    /// HTTP method
    pub method: HttpMethod,
    /// Authenticate with the bot token instead of the user token
    pub as_bot: bool,
}

impl ApiRequest {
    /// GET request with no parameters
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: Vec::new(),
            method: HttpMethod::Get,
            as_bot: false,
        }
    }

    /// POST request with no parameters
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::get(endpoint)
        }
    }

    /// Append a parameter
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Send with the bot token
    pub fn as_bot(mut self) -> Self {
        self.as_bot = true;
        self
    }

    /// Look up a parameter value
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// What came back over the wire, before any Slack-level interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw `Retry-After` header value, if present
    pub retry_after: Option<String>,
    /// Response body
    pub body: String,
}

impl RawResponse {
    /// 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            retry_after: None,
            body: body.into(),
        }
    }

    /// 429 response asking to wait `retry_after`
    pub fn rate_limited(retry_after: impl Into<String>) -> Self {
        Self {
            status: 429,
            retry_after: Some(retry_after.into()),
            body: String::new(),
        }
    }
}

/// Sends one HTTP request and returns the raw response
pub trait Transport {
    /// Issue `request` against `url`, authenticated with `token`
    fn send(&self, url: &str, token: &str, request: &ApiRequest) -> Result<RawResponse, SlackError>;
}

/// Blocking reqwest transport with reqwest's default timeouts
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, url: &str, token: &str, request: &ApiRequest) -> Result<RawResponse, SlackError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(url).query(&request.params),
            HttpMethod::Post => self.client.post(url).form(&request.params),
        };

        let response = builder.bearer_auth(token).send()?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text()?;

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }
}
