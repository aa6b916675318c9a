//! Command-line interface definitions.

use clap::{Parser, Subcommand};

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "sleeper-reporter",
    about = "Polls a Sleeper fantasy league and publishes transaction reports and rumors",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a session and scan on the configured cadence
    Run {
        /// Override the LEAGUE_ID environment variable
        #[arg(long)]
        league_id: Option<String>,
    },
    /// Build a session, run one scan immediately, and exit
    Once {
        /// Override the LEAGUE_ID environment variable
        #[arg(long)]
        league_id: Option<String>,
    },
}
