//! Archival of a single channel

use crate::{AlertTemplate, ReaperConfig, ReaperError};
use reaper_domain::{Channel, WorkspaceApi};
use std::fmt::Display;

/// Notifies a channel and archives it
///
/// In dry-run mode only the intent is logged and no calls are made.
#[derive(Debug, Clone)]
pub struct Archiver {
    dry_run: bool,
    days_inactive: u64,
    alert: AlertTemplate,
}

impl Archiver {
    /// Create an archiver for the given run configuration
    pub fn new(config: &ReaperConfig, alert: AlertTemplate) -> Self {
        Self {
            dry_run: config.dry_run,
            days_inactive: config.days_inactive,
            alert,
        }
    }

    /// Archive `channel`, posting the alert to it first
    pub fn archive<A>(&self, api: &mut A, channel: &Channel) -> Result<(), ReaperError>
    where
        A: WorkspaceApi,
        A::Error: Display,
    {
        tracing::info!(channel_id = %channel.id, "Archiving channel... {}", channel.name);

        if self.dry_run {
            return Ok(());
        }

        let message = self.alert.render(self.days_inactive);
        self.send_message(api, &channel.id, &message)?;

        let archived = api
            .archive_channel(&channel.id)
            .map_err(|e| ReaperError::Api(e.to_string()))?;
        if !archived {
            tracing::warn!(channel = %channel.name, "Slack did not accept the archive request");
        }

        tracing::info!(channel_id = %channel.id, "Archived channel {}", channel.name);
        Ok(())
    }

    /// Post a message as the bot user
    ///
    /// Returns whether the platform accepted the message.
    pub fn send_message<A>(&self, api: &mut A, channel_id: &str, text: &str) -> Result<bool, ReaperError>
    where
        A: WorkspaceApi,
        A::Error: Display,
    {
        let posted = api
            .post_message(channel_id, text)
            .map_err(|e| ReaperError::Api(e.to_string()))?;
        if !posted {
            tracing::warn!(channel_id, "Message was not posted");
        }
        Ok(posted)
    }
}
