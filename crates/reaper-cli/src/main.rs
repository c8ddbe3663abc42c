//! Channel Reaper CLI - archive inactive Slack channels.

use clap::Parser;
use reaper_cli::{logging, Cli, Config, Formatter};
use reaper_slack::SlackClient;

fn main() {
    let cli = Cli::parse();
    let formatter = Formatter::new(!cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli, formatter: &Formatter) -> reaper_cli::Result<()> {
    let config = Config::resolve(&cli)?;
    logging::init(cli.verbose, &config.files.audit_log)?;
    tracing::debug!(?config, "Resolved configuration");

    let mut reaper = reaper_cli::build_reaper(&config)?;
    let mut client = SlackClient::new(config.slack.clone());

    let outcome = reaper.run(&mut client)?;
    println!("{}", formatter.run_summary(&outcome, config.reaper.dry_run));

    Ok(())
}
