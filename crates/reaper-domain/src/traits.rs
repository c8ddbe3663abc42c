//! Trait definitions for external interactions
//!
//! These traits define the boundary between reaping logic and the workspace
//! platform. The Slack implementation lives in `reaper-slack`.

use crate::{Channel, HistoryMessage};

/// Operations the reaper needs from a workspace platform
///
/// Implemented by the infrastructure layer (reaper-slack)
pub trait WorkspaceApi {
    /// Error type for platform operations
    type Error;

    /// List every non-archived channel
    fn list_channels(&mut self) -> Result<Vec<Channel>, Self::Error>;

    /// Fetch the most recent history of a channel, newest first
    ///
    /// `Ok(None)` means the platform returned no usable history: the call was
    /// rejected or the response carried no `messages` field.
    fn channel_history(&mut self, channel_id: &str)
        -> Result<Option<Vec<HistoryMessage>>, Self::Error>;

    /// Post a message to a channel as the bot user
    ///
    /// Returns `false` when the platform did not accept the message.
    fn post_message(&mut self, channel_id: &str, text: &str) -> Result<bool, Self::Error>;

    /// Archive a channel
    ///
    /// Returns `false` when the platform did not accept the request.
    fn archive_channel(&mut self, channel_id: &str) -> Result<bool, Self::Error>;
}
