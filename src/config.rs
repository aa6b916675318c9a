//! Environment-sourced configuration.
//!
//! The scan cadence is expressed as a reset period (hours/minutes/seconds
//! between scans); from it we derive how many scans fit in a day and how
//! long each countdown lasts. The session is rebuilt from scratch after
//! `reset_count` scans.

use crate::{ReporterError, Result, INDICATOR};


pub const SECONDS_PER_DAY: u64 = 24 * 3600;

/// Selects which credential pair the session runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Prod,
    Dev,
}

/// Credential material for the social-media API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    pub bearer_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub league_id: String,
    pub mode: Mode,
    /// Scans per session; reaching it ends the session.
    pub reset_count: u32,
    /// Countdown seconds before each scan.
    pub wait_seconds: u64,
    pub indicator: String,
    pub credentials: Credentials,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any name -> value lookup. `from_env` in disguise, and the
    /// seam the config tests use.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &str| {
            lookup(var).ok_or_else(|| ReporterError::MissingEnv {
                var: var.to_string(),
            })
        };

        let league_id = require("LEAGUE_ID")?;

        let mode = match lookup("MODE").as_deref() {
            Some("PROD") => Mode::Prod,
            _ => Mode::Dev,
        };

        let hours: u64 = require("RESET_PERIOD_HOUR")?.parse()?;
        let minutes: u64 = require("RESET_PERIOD_MINUTE")?.parse()?;
        let seconds: u64 = require("RESET_PERIOD_SECOND")?.parse()?;
        let period = hours * 3600 + minutes * 60 + seconds;
        if period == 0 || period > SECONDS_PER_DAY {
            return Err(ReporterError::InvalidConfig {
                message: format!("reset period must be between 1s and 24h, got {period}s"),
            });
        }
        let reset_count = (SECONDS_PER_DAY / period) as u32;
        let wait_seconds = SECONDS_PER_DAY / reset_count as u64;

        let (access_token, access_token_secret) = match mode {
            Mode::Prod => (require("ACCESS_TOKEN")?, require("ACCESS_TOKEN_SECRET")?),
            Mode::Dev => (
                require("DEV_ACCESS_TOKEN")?,
                require("DEV_ACCESS_TOKEN_SECRET")?,
            ),
        };

        Ok(Self {
            league_id,
            mode,
            reset_count,
            wait_seconds,
            indicator: INDICATOR.to_string(),
            credentials: Credentials {
                consumer_key: require("API_KEY")?,
                consumer_secret: require("SECRET")?,
                access_token,
                access_token_secret,
                bearer_token: lookup("BEARER_TOKEN"),
            },
        })
    }
}
