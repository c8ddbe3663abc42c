//! In-memory workspace used by the unit tests

use reaper_domain::{Channel, HistoryMessage, WorkspaceApi};
use std::collections::HashMap;

/// Workspace stand-in that serves canned data and records every call
#[derive(Debug, Default)]
pub struct MockApi {
    pub channels: Vec<Channel>,
    pub histories: HashMap<String, Option<Vec<HistoryMessage>>>,
    pub history_requests: Vec<String>,
    pub posted: Vec<(String, String)>,
    pub archived: Vec<String>,
    pub reject_archive: bool,
    pub fail_history_for: Option<String>,
    log: Vec<String>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel: Channel, history: Option<Vec<HistoryMessage>>) -> Self {
        self.histories.insert(channel.id.clone(), history);
        self.channels.push(channel);
        self
    }

    /// Mutating calls in the order they were made
    pub fn calls(&self) -> Vec<&str> {
        self.log.iter().map(String::as_str).collect()
    }
}

impl WorkspaceApi for MockApi {
    type Error = String;

    fn list_channels(&mut self) -> Result<Vec<Channel>, Self::Error> {
        Ok(self.channels.clone())
    }

    fn channel_history(&mut self, channel_id: &str) -> Result<Option<Vec<HistoryMessage>>, Self::Error> {
        self.history_requests.push(channel_id.to_string());
        if self.fail_history_for.as_deref() == Some(channel_id) {
            return Err(format!("history fetch failed for {}", channel_id));
        }
        Ok(self.histories.get(channel_id).cloned().flatten())
    }

    fn post_message(&mut self, channel_id: &str, text: &str) -> Result<bool, Self::Error> {
        self.log.push(format!("post:{}", channel_id));
        self.posted.push((channel_id.to_string(), text.to_string()));
        Ok(true)
    }

    fn archive_channel(&mut self, channel_id: &str) -> Result<bool, Self::Error> {
        self.log.push(format!("archive:{}", channel_id));
        if self.reject_archive {
            return Ok(false);
        }
        self.archived.push(channel_id.to_string());
        Ok(true)
    }
}
