//! In-memory [`SocialClient`] double used by the test suites.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{DirectMessage, Follower, SocialClient};
use crate::{ReporterError, Result};

/// Records every publish and DM; serves canned followers and DM feeds.
///
/// Sent DMs are prepended to the participant's feed, so the indicator-token
/// boundary behaves exactly as it does against the real API.
#[derive(Debug, Default)]
pub struct RecordingSocial {
    followers: Vec<Follower>,
    fail_publish: bool,
    fail_followers: bool,
    dm_feeds: Mutex<HashMap<String, Vec<DirectMessage>>>,
    posts: Mutex<Vec<String>>,
    sent_dms: Mutex<Vec<(String, String)>>,
}

impl RecordingSocial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_followers(mut self, followers: Vec<Follower>) -> Self {
        self.followers = followers;
        self
    }

    /// Seed the DM event feed for one participant, newest first.
    pub fn with_dm_feed(self, participant_id: &str, feed: Vec<DirectMessage>) -> Self {
        if let Ok(mut feeds) = self.dm_feeds.lock() {
            feeds.insert(participant_id.to_string(), feed);
        }
        self
    }

    /// Make every `publish` call fail.
    pub fn failing_publish(mut self) -> Self {
        self.fail_publish = true;
        self
    }

    /// Make `followers` fail, as the real API does for accounts that cannot
    /// list followers.
    pub fn failing_followers(mut self) -> Self {
        self.fail_followers = true;
        self
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn sent_dms(&self) -> Vec<(String, String)> {
        self.sent_dms.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SocialClient for RecordingSocial {
    async fn me(&self) -> Result<String> {
        Ok("reporter-bot".to_string())
    }

    async fn followers(&self) -> Result<Vec<Follower>> {
        if self.fail_followers {
            return Err(ReporterError::social("cannot list followers"));
        }
        Ok(self.followers.clone())
    }

    async fn dm_events(&self, participant_id: &str) -> Result<Vec<DirectMessage>> {
        Ok(self
            .dm_feeds
            .lock()
            .ok()
            .and_then(|feeds| feeds.get(participant_id).cloned())
            .unwrap_or_default())
    }

    async fn send_dm(&self, participant_id: &str, text: &str) -> Result<()> {
        if let Ok(mut sent) = self.sent_dms.lock() {
            sent.push((participant_id.to_string(), text.to_string()));
        }
        if let Ok(mut feeds) = self.dm_feeds.lock() {
            feeds.entry(participant_id.to_string()).or_default().insert(
                0,
                DirectMessage {
                    sender_id: "reporter-bot".to_string(),
                    text: text.to_string(),
                },
            );
        }
        Ok(())
    }

    async fn publish(&self, text: &str) -> Result<()> {
        if self.fail_publish {
            return Err(ReporterError::social("publish rejected"));
        }
        if let Ok(mut posts) = self.posts.lock() {
            posts.push(text.to_string());
        }
        Ok(())
    }
}
