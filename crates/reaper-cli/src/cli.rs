//! Command-line arguments and environment overrides.

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use reaper_janitor::ReaperConfig;
use std::path::PathBuf;

/// Channel Reaper - archive Slack channels nobody uses any more.
///
/// Every setting can also come from the config file; flags and environment
/// variables take precedence over it.
#[derive(Debug, Parser)]
#[command(name = "channel-reaper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: ~/.channel-reaper/config.toml)
    #[arg(short, long, env = "CHANNEL_REAPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start from a built-in reaper preset instead of the file's [reaper] section
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// User token for listing, history and archiving
    #[arg(long, env = "SLACK_TOKEN", hide_env_values = true)]
    pub slack_token: Option<String>,

    /// Bot token for posting messages
    #[arg(long, env = "BOT_SLACK_TOKEN", hide_env_values = true)]
    pub bot_slack_token: Option<String>,

    /// Slack Web API base URL
    #[arg(long, env = "SLACK_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Evaluate and report without posting or archiving
    #[arg(long, env = "DRY_RUN", value_parser = BoolishValueParser::new())]
    pub dry_run: Option<bool>,

    /// Days without activity before a channel is archived
    #[arg(long, env = "DAYS_INACTIVE")]
    pub days_inactive: Option<u64>,

    /// Channels with at least this many members are kept (0 disables)
    #[arg(long, env = "MIN_MEMBERS")]
    pub min_members: Option<u32>,

    /// Channel id that receives the admin report
    #[arg(long, env = "ADMIN_CHANNEL")]
    pub admin_channel: Option<String>,

    /// Marker in a purpose or topic that exempts a channel
    #[arg(long, env = "SKIP_CHANNEL_STR")]
    pub skip_channel_str: Option<String>,

    /// Message subtypes that do not count as activity
    #[arg(long, env = "SKIP_SUBTYPES", value_delimiter = ',')]
    pub skip_subtypes: Option<Vec<String>>,

    /// Channel name substrings exempt from archiving
    #[arg(long, env = "WHITELIST_KEYWORDS", value_delimiter = ',')]
    pub whitelist_keywords: Option<Vec<String>>,

    /// Whitelist file, one channel name per line
    #[arg(long)]
    pub whitelist_file: Option<PathBuf>,

    /// Alert templates file
    #[arg(long)]
    pub templates_file: Option<PathBuf>,

    /// Audit log file, appended to on every run
    #[arg(long)]
    pub audit_log: Option<PathBuf>,

    /// Directory the run report is written to
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

/// Built-in reaper presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 60 days, no membership minimum
    Default,
    /// 30 days, no membership minimum
    Aggressive,
    /// 180 days, channels with 10+ members kept
    Lenient,
}

impl From<Preset> for ReaperConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Default => ReaperConfig::default(),
            Preset::Aggressive => ReaperConfig::aggressive(),
            Preset::Lenient => ReaperConfig::lenient(),
        }
    }
}
