//! CLI for mergedeps.
//!
//! Finds open Dependabot pull requests across a GitHub organization, asks
//! once per distinct upgrade whether to merge it, and tells Dependabot to
//! merge every approved pull request once its checks pass.

use clap::Parser;
use mergedeps::{MergeError, MergerConfig, RunSummary, Runner, Settings};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// mergedeps - Approve and merge Dependabot upgrades across a GitHub organization.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub organization to scan.
    org: String,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comment that instructs Dependabot to merge.
    #[arg(long)]
    merge_command: Option<String>,

    /// User id of the upgrade bot whose pull requests are processed.
    #[arg(long)]
    bot_user_id: Option<u64>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long)]
    api_url: Option<String>,

    /// Report merges without posting merge commands.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e @ MergeError::Config(_)) => {
            error!(error = %e, "Invalid configuration");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Uses compact single-line output without module targets. The level is
/// taken from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the configuration: defaults, then the settings file, then flags.
fn build_config(args: Args) -> Result<MergerConfig, MergeError> {
    let mut config = MergerConfig::new(args.org, args.token).with_dry_run(args.dry_run);

    if let Some(path) = &args.config {
        config = config.with_settings(Settings::load(path)?);
    }
    if let Some(command) = args.merge_command {
        config = config.with_merge_command(command);
    }
    if let Some(id) = args.bot_user_id {
        config = config.with_bot_user_id(id);
    }
    if let Some(url) = args.api_url {
        config = config.with_api_url(url);
    }

    Ok(config)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, MergeError> {
    let runner = Runner::new(build_config(args)?)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("...");
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Repositories scanned: {}", summary.repositories_scanned);
    println!("  Pull requests seen: {}", summary.pull_requests_seen);
    println!(
        "  Upgrades approved: {}, declined: {}",
        summary.upgrades_approved, summary.upgrades_declined
    );
    println!("  Merges triggered: {}", summary.merges_triggered());
    println!("  Pull requests skipped: {}", summary.skipped());
}
