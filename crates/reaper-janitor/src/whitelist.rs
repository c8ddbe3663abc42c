//! Exemptions from archival

use reaper_domain::Channel;

/// Channels that must never be archived
///
/// A channel is exempt when its purpose or topic contains the marker string,
/// or when its name contains any whitelisted name.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    marker: String,
    names: Vec<String>,
}

impl Whitelist {
    /// Build a whitelist from a marker string and name substrings
    ///
    /// Names are trimmed and stripped of leading `#`. Matching is plain
    /// substring matching, so an empty marker or a blank name exempts every
    /// channel.
    pub fn new<I, S>(marker: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let marker = marker.into();
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().trim_start_matches('#').to_string())
            .collect();

        if marker.is_empty() {
            tracing::warn!("Empty exemption marker, every channel is whitelisted");
        }
        if names.iter().any(String::is_empty) {
            tracing::warn!("Blank whitelist name, every channel is whitelisted");
        }

        Self { marker, names }
    }

    /// Parse a line-delimited whitelist file, one trimmed name per line
    pub fn parse_lines(contents: &str) -> Vec<String> {
        contents.lines().map(|l| l.trim().to_string()).collect()
    }

    /// Whitelisted name substrings
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check whether a channel is exempt from archival
    pub fn is_whitelisted(&self, channel: &Channel) -> bool {
        if self.has_marker(channel) {
            return true;
        }

        self.names.iter().any(|name| channel.name.contains(name.as_str()))
    }

    fn has_marker(&self, channel: &Channel) -> bool {
        channel.purpose.contains(&self.marker) || channel.topic.contains(&self.marker)
    }
}
