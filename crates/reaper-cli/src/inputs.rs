//! Local input files: whitelist and alert templates.

use crate::error::{CliError, Result};
use reaper_janitor::{AlertTemplates, ReaperConfig, Whitelist};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Build the whitelist from the optional whitelist file and the configured keywords.
///
/// A missing file contributes no names.
pub fn load_whitelist(path: &Path, config: &ReaperConfig) -> Result<Whitelist> {
    let mut names = match fs::read_to_string(path) {
        Ok(contents) => Whitelist::parse_lines(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No whitelist file");
            Vec::new()
        }
        Err(e) => {
            return Err(CliError::Input(format!(
                "Failed to read whitelist {}: {}",
                path.display(),
                e
            )))
        }
    };
    names.extend(config.whitelist_keywords.iter().cloned());

    let whitelist = Whitelist::new(config.skip_channel_str.clone(), names);
    tracing::info!(names = whitelist.names().len(), "Loaded whitelist");
    Ok(whitelist)
}

/// Load the alert templates. The file is required.
pub fn load_templates(path: &Path) -> Result<AlertTemplates> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::Input(format!("Failed to read templates {}: {}", path.display(), e))
    })?;
    Ok(AlertTemplates::from_json(&contents)?)
}
