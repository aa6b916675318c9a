//! Entry point: parse CLI, build sessions, and supervise restarts.

use clap::Parser;
use sleeper_reporter::{
    cli::{Cli, Commands},
    config::Config,
    session::Session,
    social::{ConsoleSocial, SocialClient},
    Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Consecutive session failures tolerated before the process gives up.
const MAX_CONSECUTIVE_FAILURES: u32 = 20;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = Cli::parse();

    match app.command {
        Commands::Run { league_id } => {
            let config = load_config(league_id)?;
            let social = ConsoleSocial::new();
            supervise(&config, &social).await;
        }
        Commands::Once { league_id } => {
            let config = load_config(league_id)?;
            let social = ConsoleSocial::new();
            let mut session = Session::start(&config, &social).await?;
            let outcome = session.scan_once(&social).await?;
            info!(
                new = outcome.new_transactions,
                total = outcome.total_transactions,
                rumors = outcome.rumors,
                "single scan complete"
            );
        }
    }

    Ok(())
}

fn load_config(league_id_override: Option<String>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(league_id) = league_id_override {
        config.league_id = league_id;
    }
    Ok(config)
}

/// Rebuild the whole session (league cache included) after each completed
/// run or failure; stop after too many consecutive failures.
async fn supervise(config: &Config, social: &dyn SocialClient) {
    let mut failures = 0u32;

    while failures < MAX_CONSECUTIVE_FAILURES {
        info!(failures, "building reporter session");
        match run_session(config, social).await {
            Ok(scans) => {
                failures = 0;
                info!(scans, "session complete; rebuilding");
            }
            Err(e) => {
                failures += 1;
                error!(error = %e, failures, "session failed");
            }
        }
    }

    error!("too many consecutive session failures; giving up");
}

async fn run_session(config: &Config, social: &dyn SocialClient) -> Result<u32> {
    let mut session = Session::start(config, social).await?;
    session.run(config, social).await
}
