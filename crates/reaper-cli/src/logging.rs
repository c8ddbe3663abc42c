//! Log output: stderr plus an append-only audit log.

use crate::error::{CliError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Open the audit log for appending, creating it if needed
pub fn open_audit_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Logging(format!("Failed to open audit log {}: {}", path.display(), e)))
}

/// Install the global subscriber.
///
/// `-v` wins over `RUST_LOG`; without it `RUST_LOG` is honoured and the
/// level defaults to info.
pub fn init(verbose: bool, audit_log: &Path) -> Result<()> {
    let audit = open_audit_log(audit_log)?;

    let filter = if verbose {
        EnvFilter::new(default_directive(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(fmt::layer().with_writer(Mutex::new(audit)).with_ansi(false))
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
