mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::num::NonZeroUsize;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{self, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_JIRA_URL, TrackerSettings};
use crate::context::AppContext;
use crate::domain::description::Palette;
use crate::error::AppResult;
use crate::infra::jira::JiraClient;

/// Annotate branch names read from stdin with their Jira ticket status.
///
/// Example: `git branch | jira-branch`
#[derive(Parser)]
#[command(name = "jira-branch", author, version)]
struct Cli {
    /// Root URL of the Jira server.
    #[arg(long, env = "JIRA_URL", default_value = DEFAULT_JIRA_URL)]
    url: String,

    /// Disable colors in output.
    #[arg(long)]
    no_color: bool,

    /// Hide ticket URLs in output.
    #[arg(long)]
    no_links: bool,

    /// Jira username for basic authentication.
    #[arg(long, env = "JIRA_USER")]
    user: Option<String>,

    /// Jira password or API token for basic authentication.
    #[arg(long, env = "JIRA_TOKEN", hide_env_values = true)]
    password: Option<String>,

    /// Limit how many lookups run at once. Unlimited when omitted.
    #[arg(long)]
    max_in_flight: Option<NonZeroUsize>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(!cli.no_color);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing(ansi: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    let tracker = TrackerSettings::new(&cli.url, cli.user, cli.password)?;
    let config = AppConfig {
        tracker: tracker.clone(),
        palette: Palette::new(!cli.no_color),
        include_links: !cli.no_links,
        max_in_flight: cli.max_in_flight.map(NonZeroUsize::get),
    };

    let issue_tracker = Arc::new(JiraClient::new(tracker));
    let context = AppContext::new(config, issue_tracker);

    let summary = context
        .dispatcher()
        .run(BufReader::new(io::stdin()), io::stdout())
        .await?;

    debug!(
        lines_read = summary.lines_read,
        lines_written = summary.lines_written,
        base_url = %context.config.tracker.base_url,
        "finished"
    );

    Ok(())
}
