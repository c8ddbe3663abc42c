//! Channel Reaper Janitor
//!
//! Finds channels nobody uses any more and archives them.
//!
//! # Overview
//!
//! A run is a single synchronous pass over the workspace:
//! - **Listing**: every non-archived channel is fetched once
//! - **Whitelist check**: a marker string in the purpose or topic, or a
//!   whitelisted name substring, exempts a channel
//! - **Disuse check**: the last real message is at or before the cutoff and
//!   the channel has fewer members than the configured minimum
//! - **Archival**: the channel is told why, then archived
//! - **Reporting**: an admin notice and a `report-<timestamp>.txt` file
//!
//! Both checks run for every channel; a channel is archived when it is
//! disused and not whitelisted.
//!
//! # Usage
//!
//! ```no_run
//! use reaper_janitor::{AlertTemplates, Reaper, ReaperConfig, Whitelist};
//! use reaper_slack::{SlackClient, SlackConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReaperConfig::default();
//! let names = Whitelist::parse_lines(&std::fs::read_to_string("whitelist.txt")?);
//! let whitelist = Whitelist::new(config.skip_channel_str.clone(), names);
//! let templates = AlertTemplates::from_json(&std::fs::read_to_string("templates.json")?)?;
//!
//! let mut client = SlackClient::new(SlackConfig::default());
//! let mut reaper = Reaper::new(config, whitelist, templates.channel_alert());
//!
//! let outcome = reaper.run(&mut client)?;
//! println!("{}", outcome.metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [reaper]
//! dry_run = true
//! days_inactive = 60
//! min_members = 0
//! admin_channel = "C0123456"
//! skip_subtypes = ["channel_leave", "channel_join"]
//! skip_channel_str = "%noarchive"
//! whitelist_keywords = ["general", "announcements"]
//! report_dir = "."
//! ```

#![warn(missing_docs)]

mod archiver;
mod config;
mod disuse;
mod error;
mod metrics;
mod reaper;
mod reporter;
mod template;
mod whitelist;

#[cfg(test)]
mod testing;

pub use archiver::Archiver;
pub use config::ReaperConfig;
pub use disuse::DisuseEvaluator;
pub use error::ReaperError;
pub use metrics::ReapMetrics;
pub use reaper::{ReapOutcome, Reaper};
pub use reporter::Reporter;
pub use template::{AlertTemplate, AlertTemplates, DAYS_INACTIVE_PLACEHOLDER};
pub use whitelist::Whitelist;
