//! Seam for the social-media API: identify-self, followers, direct messages,
//! and post publishing. The real SDK binding plugs in here; the crate ships a
//! console-backed sink for dry runs and local development.

use async_trait::async_trait;
use tracing::info;

use crate::Result;

pub mod testing;


/// A follower of the reporter account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follower {
    pub id: String,
    pub name: String,
}

/// One direct message. Event feeds are ordered newest-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessage {
    pub sender_id: String,
    pub text: String,
}

/// Authenticated social-media operations the reporter depends on.
#[async_trait]
pub trait SocialClient: Send + Sync {
    /// The reporter account's own user id.
    async fn me(&self) -> Result<String>;

    async fn followers(&self) -> Result<Vec<Follower>>;

    /// Direct-message events exchanged with one participant, newest first.
    async fn dm_events(&self, participant_id: &str) -> Result<Vec<DirectMessage>>;

    async fn send_dm(&self, participant_id: &str, text: &str) -> Result<()>;

    /// Publish a post to the public feed.
    async fn publish(&self, text: &str) -> Result<()>;
}

/// Publishes to the log instead of a real feed. No followers, no DMs.
#[derive(Debug, Default)]
pub struct ConsoleSocial;

impl ConsoleSocial {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SocialClient for ConsoleSocial {
    async fn me(&self) -> Result<String> {
        Ok("console".to_string())
    }

    async fn followers(&self) -> Result<Vec<Follower>> {
        Ok(Vec::new())
    }

    async fn dm_events(&self, _participant_id: &str) -> Result<Vec<DirectMessage>> {
        Ok(Vec::new())
    }

    async fn send_dm(&self, participant_id: &str, text: &str) -> Result<()> {
        info!(participant_id, text, "dm (console)");
        Ok(())
    }

    async fn publish(&self, text: &str) -> Result<()> {
        info!(post = text, "publish (console)");
        Ok(())
    }
}
