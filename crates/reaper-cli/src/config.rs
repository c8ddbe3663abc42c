//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use reaper_janitor::ReaperConfig;
use reaper_slack::SlackConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// ```toml
/// [slack]
/// user_token = "xoxp-..."
/// bot_token = "xoxb-..."
///
/// [reaper]
/// days_inactive = 90
/// admin_channel = "C0123456"
///
/// [files]
/// whitelist = "whitelist.txt"
/// templates = "templates.json"
/// audit_log = "audit.log"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Slack connection settings
    #[serde(default)]
    pub slack: SlackConfig,

    /// Reaping rules
    #[serde(default)]
    pub reaper: ReaperConfig,

    /// Local input and output files
    #[serde(default)]
    pub files: FilesConfig,
}

/// Local files read and written by a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Optional whitelist, one channel name per line
    #[serde(default = "default_whitelist")]
    pub whitelist: PathBuf,

    /// Alert templates (JSON with a `channel_template` key)
    #[serde(default = "default_templates")]
    pub templates: PathBuf,

    /// Append-only audit log
    #[serde(default = "default_audit_log")]
    pub audit_log: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            whitelist: default_whitelist(),
            templates: default_templates(),
            audit_log: default_audit_log(),
        }
    }
}

fn default_whitelist() -> PathBuf {
    PathBuf::from("whitelist.txt")
}

fn default_templates() -> PathBuf {
    PathBuf::from("templates.json")
}

fn default_audit_log() -> PathBuf {
    PathBuf::from("audit.log")
}

impl Config {
    /// Default configuration file path, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".channel-reaper").join("config.toml"))
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the default path is used when
    /// present, and built-in defaults when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Resolve the final configuration for a run: file, preset, then overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = Self::load(cli.config.as_deref())?;
        if let Some(preset) = cli.preset {
            config.reaper = ReaperConfig {
                report_dir: config.reaper.report_dir.clone(),
                ..preset.into()
            };
        }
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Apply flag and environment overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(token) = &cli.slack_token {
            self.slack.user_token = token.clone();
        }
        if let Some(token) = &cli.bot_slack_token {
            self.slack.bot_token = token.clone();
        }
        if let Some(url) = &cli.api_base_url {
            self.slack.api_base_url = url.clone();
        }

        if let Some(dry_run) = cli.dry_run {
            self.reaper.dry_run = dry_run;
        }
        if let Some(days) = cli.days_inactive {
            self.reaper.days_inactive = days;
        }
        if let Some(min_members) = cli.min_members {
            self.reaper.min_members = min_members;
        }
        if let Some(channel) = &cli.admin_channel {
            self.reaper.admin_channel = Some(channel.clone());
        }
        if let Some(marker) = &cli.skip_channel_str {
            self.reaper.skip_channel_str = marker.clone();
        }
        if let Some(subtypes) = &cli.skip_subtypes {
            self.reaper.skip_subtypes = subtypes.clone();
        }
        if let Some(keywords) = &cli.whitelist_keywords {
            self.reaper.whitelist_keywords = keywords.clone();
        }
        if let Some(dir) = &cli.report_dir {
            self.reaper.report_dir = dir.clone();
        }

        if let Some(path) = &cli.whitelist_file {
            self.files.whitelist = path.clone();
        }
        if let Some(path) = &cli.templates_file {
            self.files.templates = path.clone();
        }
        if let Some(path) = &cli.audit_log {
            self.files.audit_log = path.clone();
        }
    }
}
