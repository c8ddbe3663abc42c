//! Channel snapshots and the records derived from them

/// A conversation as listed by the workspace at the start of a run
///
/// Snapshots are never mutated: every archival decision for a channel is made
/// from this record plus a single history fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Platform channel identifier (e.g. "C0123456")
    pub id: String,

    /// Channel name without the leading '#'
    pub name: String,

    /// Creation time in seconds since the Unix epoch, if the platform sent one
    pub created: Option<i64>,

    /// Number of members (0 when the platform omits the count)
    pub num_members: u32,

    /// Topic text (empty when unset)
    pub topic: String,

    /// Purpose text (empty when unset)
    pub purpose: String,
}

impl Channel {
    /// Create a channel snapshot with empty topic and purpose
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created: None,
            num_members: 0,
            topic: String::new(),
            purpose: String::new(),
        }
    }

    /// Set the creation timestamp
    pub fn with_created(mut self, created: i64) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the member count
    pub fn with_members(mut self, num_members: u32) -> Self {
        self.num_members = num_members;
        self
    }

    /// Set the topic text
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Set the purpose text
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Creation time as fractional seconds, or the epoch when unknown
    pub fn created_or_epoch(&self) -> f64 {
        self.created.map(|c| c as f64).unwrap_or(0.0)
    }
}

/// A single entry of a channel's message history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryMessage {
    /// Message timestamp in fractional seconds since the epoch
    pub ts: f64,

    /// Message subtype ("channel_join", "bot_message", ...) if any
    pub subtype: Option<String>,
}

impl HistoryMessage {
    /// Create a plain user message
    pub fn new(ts: f64) -> Self {
        Self { ts, subtype: None }
    }

    /// Create a message carrying a subtype
    pub fn with_subtype(ts: f64, subtype: impl Into<String>) -> Self {
        Self {
            ts,
            subtype: Some(subtype.into()),
        }
    }
}

/// What a run remembers about a channel it archived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedChannel {
    /// Platform channel identifier
    pub id: String,

    /// Channel name without the leading '#'
    pub name: String,
}

impl From<&Channel> for ArchivedChannel {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.clone(),
            name: channel.name.clone(),
        }
    }
}
