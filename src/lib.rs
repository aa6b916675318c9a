//! Sleeper Fantasy Football League Reporter
//!
//! A small bot that polls a Sleeper fantasy-football league for new roster
//! transactions and follower-submitted rumors, formats human-readable
//! summaries, and publishes them to a social-media feed.
//!
//! ## Features
//!
//! - **Transaction Reports**: trades, free-agent moves, and completed waiver
//!   claims summarized as short publishable blurbs
//! - **Rumor Intake**: followers DM `RUMOR <text>` and the bot posts an
//!   anonymized paraphrase
//! - **Fixed-Interval Scanning**: a Waiting/Scanning loop derived from the
//!   configured scans-per-day, with a live countdown
//! - **Session Supervision**: all league data is cached in-memory per session
//!   and rebuilt from scratch on restart
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_reporter::{config::Config, session::Session, social::ConsoleSocial};
//!
//! # async fn example() -> sleeper_reporter::Result<()> {
//! let config = Config::from_env()?;
//! let social = ConsoleSocial::new();
//! let mut session = Session::start(&config, &social).await?;
//! session.run(&config, &social).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export LEAGUE_ID=992123456789012345
//! export MODE=PROD
//! export RESET_PERIOD_HOUR=1
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod league;
pub mod poller;
pub mod report;
pub mod rumor;
pub mod scanner;
pub mod session;
pub mod sleeper;
pub mod social;

// Re-export commonly used types
pub use error::{ReporterError, Result};
pub use league::LeagueData;
pub use sleeper::types::{DraftPick, League, Player, Roster, Transaction, TransactionType, User};

pub const LEAGUE_ID_ENV_VAR: &str = "LEAGUE_ID";

/// Marker string embedded in acknowledgment DMs; scanning stops at the most
/// recent message that contains it.
pub const INDICATOR: &str = "--##--";
