//! End-of-run reporting: admin notice and report file

use crate::{Archiver, ReaperConfig, ReaperError};
use chrono::{DateTime, Local};
use reaper_domain::{ArchivedChannel, WorkspaceApi};
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

/// Timestamp format used in report file names (MMDDYYYYHHMMSS)
const REPORT_TIMESTAMP_FORMAT: &str = "%m%d%Y%H%M%S";

/// Summarizes the channels archived during a run
#[derive(Debug, Clone)]
pub struct Reporter {
    admin_channel: Option<String>,
    dry_run: bool,
    report_dir: PathBuf,
}

impl Reporter {
    /// Create a reporter for the given run configuration
    pub fn new(config: &ReaperConfig) -> Self {
        Self {
            admin_channel: config.admin_channel.clone().filter(|c| !c.is_empty()),
            dry_run: config.dry_run,
            report_dir: config.report_dir.clone(),
        }
    }

    /// Text of the admin notice
    pub fn admin_message(&self, archived: &[ArchivedChannel]) -> String {
        let names = archived
            .iter()
            .map(|c| format!("#{}", c.name))
            .collect::<Vec<_>>()
            .join(", ");
        let message = format!("Archiving {} channels: {}", archived.len(), names);

        if self.dry_run {
            format!("[DRY RUN] {}", message)
        } else {
            message
        }
    }

    /// Post the admin notice, if an admin channel is configured
    ///
    /// Sent in dry-run mode too, with a `[DRY RUN]` prefix. Returns whether a
    /// notice was posted.
    pub fn send_admin_report<A>(
        &self,
        api: &mut A,
        archiver: &Archiver,
        archived: &[ArchivedChannel],
    ) -> Result<bool, ReaperError>
    where
        A: WorkspaceApi,
        A::Error: Display,
    {
        let Some(admin_channel) = &self.admin_channel else {
            return Ok(false);
        };

        let message = self.admin_message(archived);
        tracing::info!(admin_channel = %admin_channel, "Sending admin report");
        archiver.send_message(api, admin_channel, &message)
    }

    /// Name of the report file for a run at `at`
    pub fn report_file_name(at: &DateTime<Local>) -> String {
        format!("report-{}.txt", at.format(REPORT_TIMESTAMP_FORMAT))
    }

    /// Write the archived channel names, one per line, to the report file
    pub fn generate_report(
        &self,
        archived: &[ArchivedChannel],
        at: &DateTime<Local>,
    ) -> Result<PathBuf, ReaperError> {
        let path = self.report_dir.join(Self::report_file_name(at));
        let contents = archived
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        fs::write(&path, contents)?;
        tracing::info!(path = %path.display(), channels = archived.len(), "Wrote report");
        Ok(path)
    }
}
