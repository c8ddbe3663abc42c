//! Metrics collection for reaping runs

/// Counters collected during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReapMetrics {
    /// Channels evaluated
    pub channels_scanned: usize,

    /// Channels exempt through the whitelist
    pub whitelisted: usize,

    /// Channels found disused (whitelisted or not)
    pub disused: usize,

    /// Channels disused but exempt through the whitelist
    pub spared: usize,

    /// Channels archived (or that would be, in dry-run mode)
    pub archived: usize,

    /// Total runtime in seconds
    pub total_runtime_secs: u64,
}

impl ReapMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the verdicts for one channel
    pub fn record_channel(&mut self, whitelisted: bool, disused: bool) {
        self.channels_scanned += 1;
        if whitelisted {
            self.whitelisted += 1;
        }
        if disused {
            self.disused += 1;
            if whitelisted {
                self.spared += 1;
            }
        }
    }

    /// Record an archival
    pub fn record_archive(&mut self) {
        self.archived += 1;
    }

    /// Channels left untouched
    pub fn kept(&self) -> usize {
        self.channels_scanned - self.archived
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let lines = [
            "Reaper Run Summary".to_string(),
            "==================".to_string(),
            format!("Channels scanned: {}", self.channels_scanned),
            format!("Whitelisted: {}", self.whitelisted),
            format!("Disused: {}", self.disused),
            format!("  Spared by whitelist: {}", self.spared),
            format!("Archived: {}", self.archived),
            format!("Kept: {}", self.kept()),
            format!("Total runtime: {}s", self.total_runtime_secs),
        ];
        lines.join("\n")
    }
}
