//! Channel Reaper CLI library.
//!
//! Argument parsing, configuration loading, local input files, logging and
//! output formatting for the `channel-reaper` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod output;

pub use cli::{Cli, Preset};
pub use config::{Config, FilesConfig};
pub use error::{CliError, Result};
pub use output::Formatter;

use reaper_janitor::Reaper;

/// Build a reaper from resolved configuration, loading the whitelist and
/// templates files.
pub fn build_reaper(config: &Config) -> Result<Reaper> {
    let whitelist = inputs::load_whitelist(&config.files.whitelist, &config.reaper)?;
    let templates = inputs::load_templates(&config.files.templates)?;
    Ok(Reaper::new(
        config.reaper.clone(),
        whitelist,
        templates.channel_alert(),
    ))
}
