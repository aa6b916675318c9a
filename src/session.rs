//! Session assembly: one League Data Cache, one poller baseline, one
//! follower list, driven through the scan loop until the reset count is
//! reached. All session state lives here explicitly; a restart builds a
//! fresh `Session` and nothing survives it.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::league::LeagueData;
use crate::poller::TransactionPoller;
use crate::rumor::scan_dms;
use crate::scanner::{Clock, Scan, ScanLoop, ScanOutcome, SystemClock};
use crate::sleeper::http::SLEEPER_BASE_URL;
use crate::social::{Follower, SocialClient};
use crate::Result;


pub struct Session {
    client: Client,
    base_url: String,
    league_id: String,
    indicator: String,
    league: LeagueData,
    poller: TransactionPoller,
    followers: Vec<Follower>,
    rng: StdRng,
}

impl Session {
    /// Build a session against the live Sleeper API.
    pub async fn start(config: &Config, social: &dyn SocialClient) -> Result<Self> {
        Self::start_with(config, social, SLEEPER_BASE_URL, StdRng::from_entropy()).await
    }

    /// Build a session with an explicit Sleeper base URL and RNG.
    ///
    /// Loads the league cache, resolves the bot's identity and followers,
    /// and records the transaction baseline without publishing anything.
    /// Any fetch failure here is fatal to the session, except the follower
    /// list, which is tolerated as empty.
    pub async fn start_with(
        config: &Config,
        social: &dyn SocialClient,
        base_url: &str,
        rng: StdRng,
    ) -> Result<Self> {
        let client = Client::new();
        let league = LeagueData::load(&client, base_url, &config.league_id).await?;

        let me = social.me().await?;
        let followers = match social.followers().await {
            Ok(followers) => followers,
            Err(e) => {
                warn!(error = %e, "could not list followers; rumor intake idle this session");
                Vec::new()
            }
        };
        info!(account = %me, followers = followers.len(), "social identity resolved");

        let mut session = Self {
            client,
            base_url: base_url.to_string(),
            league_id: config.league_id.clone(),
            indicator: config.indicator.clone(),
            league,
            poller: TransactionPoller::new(),
            followers,
            rng,
        };

        let baseline = session
            .poller
            .poll(
                &session.client,
                &session.base_url,
                &session.league_id,
                &session.league,
                social,
                true,
            )
            .await?;
        info!(baseline, "transaction baseline recorded");

        Ok(session)
    }

    /// One scan: delta poll plus rumor intake.
    pub async fn scan_once(&mut self, social: &dyn SocialClient) -> Result<ScanOutcome> {
        let new_transactions = self
            .poller
            .poll(
                &self.client,
                &self.base_url,
                &self.league_id,
                &self.league,
                social,
                false,
            )
            .await?;

        let rumors = scan_dms(social, &self.followers, &self.indicator, &mut self.rng).await?;

        Ok(ScanOutcome {
            new_transactions,
            total_transactions: self.poller.total(),
            rumors,
        })
    }

    /// Drive the scan loop to its reset count on the system clock.
    pub async fn run(&mut self, config: &Config, social: &dyn SocialClient) -> Result<u32> {
        self.run_with_clock(config, social, &SystemClock).await
    }

    pub async fn run_with_clock<C: Clock>(
        &mut self,
        config: &Config,
        social: &dyn SocialClient,
        clock: &C,
    ) -> Result<u32> {
        let scan_loop = ScanLoop::new(config.reset_count, config.wait_seconds);
        let mut body = SessionScan {
            session: self,
            social,
        };
        scan_loop.run(clock, &mut body).await
    }
}

/// Adapts a session plus a social client to the scan-loop body.
struct SessionScan<'a> {
    session: &'a mut Session,
    social: &'a dyn SocialClient,
}

#[async_trait]
impl Scan for SessionScan<'_> {
    async fn scan_once(&mut self) -> Result<ScanOutcome> {
        self.session.scan_once(self.social).await
    }
}
