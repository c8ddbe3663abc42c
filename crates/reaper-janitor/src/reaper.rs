//! Core reaping loop

use crate::{
    AlertTemplate, Archiver, DisuseEvaluator, ReapMetrics, ReaperConfig, ReaperError, Reporter,
    Whitelist,
};
use chrono::{DateTime, Local};
use reaper_domain::{ArchivedChannel, WorkspaceApi};
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Instant;

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct ReapOutcome {
    /// Channels archived, in the order they were processed
    pub archived: Vec<ArchivedChannel>,

    /// Path of the written report file
    pub report_path: PathBuf,

    /// Admin notice was posted
    pub admin_notified: bool,

    /// Counters for this run
    pub metrics: ReapMetrics,
}

/// Finds and archives inactive channels
///
/// One call to [`Reaper::run`] is one batch pass: list channels, evaluate
/// each against the whitelist and the disuse rules, archive the ones that are
/// disused and not exempt, then send the admin notice and write the report.
///
/// # Examples
///
/// ```no_run
/// use reaper_janitor::{AlertTemplate, Reaper, ReaperConfig, Whitelist};
/// use reaper_slack::{SlackClient, SlackConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ReaperConfig::default();
/// let whitelist = Whitelist::new(config.skip_channel_str.clone(), ["general"]);
/// let alert = AlertTemplate::new("Inactive for {days_inactive} days, archiving.");
///
/// let mut client = SlackClient::new(SlackConfig::default());
/// let mut reaper = Reaper::new(config, whitelist, alert);
///
/// let outcome = reaper.run(&mut client)?;
/// println!("{}", outcome.metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct Reaper {
    config: ReaperConfig,
    whitelist: Whitelist,
    disuse: DisuseEvaluator,
    archiver: Archiver,
    reporter: Reporter,
    metrics: ReapMetrics,
}

impl Reaper {
    /// Create a reaper for one configuration
    pub fn new(config: ReaperConfig, whitelist: Whitelist, alert: AlertTemplate) -> Self {
        Self {
            disuse: DisuseEvaluator::new(&config),
            archiver: Archiver::new(&config, alert),
            reporter: Reporter::new(&config),
            whitelist,
            config,
            metrics: ReapMetrics::new(),
        }
    }

    /// Run configuration
    pub fn config(&self) -> &ReaperConfig {
        &self.config
    }

    /// Counters from the most recent run
    pub fn metrics(&self) -> &ReapMetrics {
        &self.metrics
    }

    /// Perform a run starting now
    pub fn run<A>(&mut self, api: &mut A) -> Result<ReapOutcome, ReaperError>
    where
        A: WorkspaceApi,
        A::Error: Display,
    {
        self.run_at(api, Local::now())
    }

    /// Perform a run as if it started at `now`
    ///
    /// The cutoff is computed once from `now` and shared by every channel.
    /// Any error aborts the run before the admin notice and report.
    pub fn run_at<A>(&mut self, api: &mut A, now: DateTime<Local>) -> Result<ReapOutcome, ReaperError>
    where
        A: WorkspaceApi,
        A::Error: Display,
    {
        let start = Instant::now();
        self.metrics.reset();

        if self.config.dry_run {
            tracing::info!("THIS IS A DRY RUN. NO CHANNELS ARE ACTUALLY ARCHIVED.");
        }

        let now_secs = now.timestamp_millis() as f64 / 1000.0;
        let cutoff = self.config.cutoff(now_secs);

        let channels = api
            .list_channels()
            .map_err(|e| ReaperError::Api(e.to_string()))?;
        tracing::info!(count = channels.len(), days_inactive = self.config.days_inactive, "Evaluating channels");

        let mut archived = Vec::new();
        for channel in &channels {
            // Both verdicts are always computed
            let whitelisted = self.whitelist.is_whitelisted(channel);
            let disused = self.disuse.is_disused(api, channel, cutoff)?;
            self.metrics.record_channel(whitelisted, disused);

            if whitelisted && disused {
                tracing::debug!(channel = %channel.name, "Disused but whitelisted, skipping");
            }

            if !whitelisted && disused {
                archived.push(ArchivedChannel::from(channel));
                self.archiver.archive(api, channel)?;
                self.metrics.record_archive();
            }
        }

        let admin_notified = self.reporter.send_admin_report(api, &self.archiver, &archived)?;
        let report_path = self.reporter.generate_report(&archived, &now)?;

        self.metrics.total_runtime_secs = start.elapsed().as_secs();

        Ok(ReapOutcome {
            archived,
            report_path,
            admin_notified,
            metrics: self.metrics.clone(),
        })
    }
}
