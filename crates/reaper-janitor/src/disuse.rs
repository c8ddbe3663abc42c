//! Inactivity detection from channel history and membership

use crate::{ReaperConfig, ReaperError};
use reaper_domain::{Channel, HistoryMessage, WorkspaceApi};
use std::collections::HashSet;
use std::fmt::Display;

/// Decides whether a channel has fallen out of use
///
/// A channel is disused when its last activity is at or before the run's
/// cutoff and the membership threshold does not protect it.
#[derive(Debug, Clone)]
pub struct DisuseEvaluator {
    min_members: u32,
    skip_subtypes: HashSet<String>,
}

impl DisuseEvaluator {
    /// Build an evaluator from the run configuration
    pub fn new(config: &ReaperConfig) -> Self {
        Self {
            min_members: config.min_members,
            skip_subtypes: config.skip_subtypes.iter().cloned().collect(),
        }
    }

    /// Fetch the channel history and evaluate it against `cutoff`
    pub fn is_disused<A>(&self, api: &mut A, channel: &Channel, cutoff: f64) -> Result<bool, ReaperError>
    where
        A: WorkspaceApi,
        A::Error: Display,
    {
        let history = api
            .channel_history(&channel.id)
            .map_err(|e| ReaperError::Api(e.to_string()))?;

        let last_activity = self.last_activity(channel, history.as_deref());
        let disused = self.evaluate(channel, last_activity, cutoff);

        tracing::debug!(
            channel = %channel.name,
            last_activity,
            cutoff,
            members = channel.num_members,
            disused,
            "Evaluated channel activity"
        );

        Ok(disused)
    }

    /// Timestamp of the newest message that counts as activity
    ///
    /// - no history, or an empty one: the epoch
    /// - every message has a skipped subtype: the channel's creation time,
    ///   or the epoch when that is unknown
    pub fn last_activity(&self, channel: &Channel, history: Option<&[HistoryMessage]>) -> f64 {
        let messages = match history {
            Some(messages) if !messages.is_empty() => messages,
            _ => return 0.0,
        };

        messages
            .iter()
            .find(|m| !self.is_skipped(m))
            .map(|m| m.ts)
            .unwrap_or_else(|| channel.created_or_epoch())
    }

    /// Apply the age and membership rules to a known last activity
    pub fn evaluate(&self, channel: &Channel, last_activity: f64, cutoff: f64) -> bool {
        last_activity <= cutoff && self.below_member_threshold(channel)
    }

    /// True unless the channel has enough members to be protected
    ///
    /// The threshold must strictly exceed the member count, so a channel with
    /// exactly `min_members` members is protected.
    pub fn below_member_threshold(&self, channel: &Channel) -> bool {
        self.min_members == 0 || self.min_members > channel.num_members
    }

    fn is_skipped(&self, message: &HistoryMessage) -> bool {
        message
            .subtype
            .as_ref()
            .is_some_and(|s| self.skip_subtypes.contains(s))
    }
}
