//! Output formatting for the CLI.

use colored::*;
use reaper_janitor::ReapOutcome;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format the end-of-run summary.
    pub fn run_summary(&self, outcome: &ReapOutcome, dry_run: bool) -> String {
        let mut lines = Vec::new();

        if dry_run {
            lines.push(self.warning("Dry run: no channels were archived"));
        }
        lines.push(outcome.metrics.summary());

        if outcome.archived.is_empty() {
            lines.push(self.info("No inactive channels found"));
        } else {
            let heading = if dry_run { "Would archive:" } else { "Archived:" };
            lines.push(self.colorize(heading, "cyan"));
            for channel in &outcome.archived {
                lines.push(format!("  #{}", channel.name));
            }
        }

        if outcome.admin_notified {
            lines.push(self.info("Admin report sent"));
        }
        lines.push(self.success(&format!(
            "Report written to {}",
            outcome.report_path.display()
        )));

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
