//! Configuration for reaping runs
//!
//! Defines the inactivity window, membership threshold and exemptions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the reaper
///
/// Resolved once at startup and read-only afterwards.
///
/// # Examples
///
/// ```
/// use reaper_janitor::ReaperConfig;
///
/// let config = ReaperConfig::default();
/// assert!(config.dry_run);
/// assert_eq!(config.days_inactive, 60);
/// assert_eq!(config.min_members, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaperConfig {
    /// Dry-run mode: evaluate and log without posting or archiving
    /// Default: true
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Days without activity after which a channel counts as inactive
    /// Default: 60
    #[serde(default = "default_days_inactive")]
    pub days_inactive: u64,

    /// Channels with at least this many members are never archived
    /// Default: 0 (no minimum)
    #[serde(default)]
    pub min_members: u32,

    /// Channel that receives the end-of-run admin report
    #[serde(default)]
    pub admin_channel: Option<String>,

    /// Message subtypes ignored when looking for the last activity
    /// Default: channel_leave, channel_join
    #[serde(default = "default_skip_subtypes")]
    pub skip_subtypes: Vec<String>,

    /// Marker that exempts a channel when found in its purpose or topic
    /// Default: "%noarchive"
    #[serde(default = "default_skip_channel_str")]
    pub skip_channel_str: String,

    /// Channel name substrings exempt from archiving
    #[serde(default)]
    pub whitelist_keywords: Vec<String>,

    /// Directory the run report is written to
    /// Default: current directory
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

fn default_dry_run() -> bool {
    true
}

fn default_days_inactive() -> u64 {
    60
}

fn default_skip_subtypes() -> Vec<String> {
    vec!["channel_leave".to_string(), "channel_join".to_string()]
}

fn default_skip_channel_str() -> String {
    "%noarchive".to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self {
            dry_run: default_dry_run(),
            days_inactive: default_days_inactive(),
            min_members: 0,
            admin_channel: None,
            skip_subtypes: default_skip_subtypes(),
            skip_channel_str: default_skip_channel_str(),
            whitelist_keywords: Vec::new(),
            report_dir: default_report_dir(),
        }
    }
}

impl ReaperConfig {
    /// Aggressive cleanup configuration
    ///
    /// - Inactive after 30 days
    /// - No membership protection
    /// - Join and leave messages ignored
    pub fn aggressive() -> Self {
        Self {
            days_inactive: 30,
            min_members: 0,
            ..Self::default()
        }
    }

    /// Lenient cleanup configuration
    ///
    /// - Inactive after 180 days
    /// - Channels with 10 or more members are kept
    pub fn lenient() -> Self {
        Self {
            days_inactive: 180,
            min_members: 10,
            ..Self::default()
        }
    }

    /// Get the inactivity window as Duration
    pub fn inactivity_window(&self) -> Duration {
        Duration::from_secs(self.days_inactive * 86400)
    }

    /// The "too old" cutoff for a run starting at `now_secs`
    pub fn cutoff(&self, now_secs: f64) -> f64 {
        now_secs - self.inactivity_window().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaperConfig::default();
        assert!(config.dry_run);
        assert_eq!(config.days_inactive, 60);
        assert_eq!(config.min_members, 0);
        assert!(config.admin_channel.is_none());
        assert_eq!(config.skip_subtypes, vec!["channel_leave", "channel_join"]);
        assert_eq!(config.skip_channel_str, "%noarchive");
        assert!(config.whitelist_keywords.is_empty());
        assert_eq!(config.report_dir, PathBuf::from("."));
    }

    #[test]
    fn test_presets() {
        let aggressive = ReaperConfig::aggressive();
        assert_eq!(aggressive.days_inactive, 30);
        assert_eq!(aggressive.min_members, 0);
        assert!(aggressive.dry_run);

        let lenient = ReaperConfig::lenient();
        assert_eq!(lenient.days_inactive, 180);
        assert_eq!(lenient.min_members, 10);
        assert!(lenient.inactivity_window() > aggressive.inactivity_window());
    }

    #[test]
    fn test_duration_conversions() {
        let config = ReaperConfig {
            days_inactive: 30,
            ..Default::default()
        };

        assert_eq!(config.inactivity_window(), Duration::from_secs(30 * 86400));
        assert_eq!(config.cutoff(10_000_000.0), 10_000_000.0 - 30.0 * 86400.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ReaperConfig =
            serde_json::from_str(r#"{"dry_run": false, "min_members": 5}"#).unwrap();

        assert!(!config.dry_run);
        assert_eq!(config.min_members, 5);
        assert_eq!(config.days_inactive, 60);
        assert_eq!(config.skip_channel_str, "%noarchive");
    }
}
