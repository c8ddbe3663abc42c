//! Slack implementation of the reaper's workspace operations.

use crate::client::SlackClient;
use crate::error::SlackError;
use crate::transport::{ApiRequest, Transport};
use reaper_domain::{Channel, HistoryMessage, WorkspaceApi};
use serde::Deserialize;

/// Lists conversations
pub const LIST_ENDPOINT: &str = "conversations.list";

/// Fetches conversation history
pub const HISTORY_ENDPOINT: &str = "conversations.history";

/// Posts a chat message
pub const POST_MESSAGE_ENDPOINT: &str = "chat.postMessage";

/// Archives a conversation
pub const ARCHIVE_ENDPOINT: &str = "conversations.archive";

/// Channels requested in the single listing page
pub const LIST_PAGE_SIZE: u32 = 1000;

/// History entries fetched per channel
pub const HISTORY_PAGE_SIZE: u32 = 50;

/// Display name of reaper notifications
const BOT_USERNAME: &str = "Auto Archiver";

/// Icon of reaper notifications
const BOT_ICON_EMOJI: &str = ":wave:";

#[derive(Debug, Deserialize)]
struct ListResponse {
    channels: Vec<RawChannel>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: String,
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    id: String,
    name: String,
    #[serde(default)]
    created: Option<i64>,
    #[serde(default)]
    num_members: Option<u32>,
    #[serde(default)]
    topic: Option<TextField>,
    #[serde(default)]
    purpose: Option<TextField>,
}

#[derive(Debug, Deserialize)]
struct TextField {
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    messages: Option<Vec<RawMessage>>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    ts: String,
    #[serde(default)]
    subtype: Option<String>,
}

impl From<RawChannel> for Channel {
    fn from(raw: RawChannel) -> Self {
        Channel {
            id: raw.id,
            name: raw.name,
            created: raw.created,
            num_members: raw.num_members.unwrap_or(0),
            topic: raw.topic.map(|t| t.value).unwrap_or_default(),
            purpose: raw.purpose.map(|p| p.value).unwrap_or_default(),
        }
    }
}

impl TryFrom<RawMessage> for HistoryMessage {
    type Error = SlackError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let ts = raw
            .ts
            .parse::<f64>()
            .map_err(|e| SlackError::Parse(format!("Invalid message ts '{}': {}", raw.ts, e)))?;
        Ok(HistoryMessage {
            ts,
            subtype: raw.subtype,
        })
    }
}

impl<T: Transport> WorkspaceApi for SlackClient<T> {
    type Error = SlackError;

    /// Single page of up to 1000 non-archived channels
    fn list_channels(&mut self) -> Result<Vec<Channel>, SlackError> {
        let request = ApiRequest::get(LIST_ENDPOINT)
            .param("exclude_archived", 1)
            .param("limit", LIST_PAGE_SIZE);

        let body = self
            .call(&request)?
            .ok_or_else(|| SlackError::UnexpectedResponse(LIST_ENDPOINT.to_string()))?;
        let response: ListResponse = serde_json::from_value(body)?;

        // Only the first page is evaluated
        let next_cursor = response.response_metadata.unwrap_or_default().next_cursor;
        if !next_cursor.is_empty() {
            tracing::warn!(
                limit = LIST_PAGE_SIZE,
                "More channels exist than fit in one page; only the first page is evaluated"
            );
        }

        tracing::debug!(count = response.channels.len(), "Listed channels");
        Ok(response.channels.into_iter().map(Channel::from).collect())
    }

    fn channel_history(&mut self, channel_id: &str) -> Result<Option<Vec<HistoryMessage>>, SlackError> {
        let request = ApiRequest::get(HISTORY_ENDPOINT)
            .param("inclusive", 0)
            .param("oldest", 0)
            .param("count", HISTORY_PAGE_SIZE)
            .param("channel", channel_id);

        let Some(body) = self.call(&request)? else {
            return Ok(None);
        };
        let response: HistoryResponse = serde_json::from_value(body)?;

        response
            .messages
            .map(|messages| {
                messages
                    .into_iter()
                    .map(HistoryMessage::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }

    fn post_message(&mut self, channel_id: &str, text: &str) -> Result<bool, SlackError> {
        let request = ApiRequest::post(POST_MESSAGE_ENDPOINT)
            .param("channel", channel_id)
            .param("username", BOT_USERNAME)
            .param("icon_emoji", BOT_ICON_EMOJI)
            .param("text", text)
            .as_bot();

        Ok(self.call(&request)?.is_some())
    }

    fn archive_channel(&mut self, channel_id: &str) -> Result<bool, SlackError> {
        let request = ApiRequest::get(ARCHIVE_ENDPOINT).param("channel", channel_id);

        Ok(self.call(&request)?.is_some())
    }
}
