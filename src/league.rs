//! League Data Cache: one snapshot of league metadata, rosters, users, and
//! the player directory, fetched at session start and never refreshed.

use reqwest::Client;
use std::collections::HashMap;
use tracing::info;

use crate::sleeper::http;
use crate::sleeper::types::{League, Player, Roster, User};
use crate::{ReporterError, Result};


/// In-memory lookup tables for name resolution.
///
/// The roster lookup is keyed by BOTH the stringified roster id and the
/// owner's user id, in one keyspace. Sleeper roster ids are small integers
/// and user ids are long numeric strings, so the two never collide in
/// practice; trade `adds` reference rosters by id while draft picks reference
/// them by the same id, and free-agent resolution goes through the owner.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub league: League,
    players: HashMap<String, Player>,
    roster_lookup: HashMap<String, Roster>,
    user_lookup: HashMap<String, User>,
}

impl LeagueData {
    /// Fetch everything the formatter needs for name resolution.
    ///
    /// Any fetch error here is fatal to the session; the supervisor decides
    /// whether to rebuild.
    pub async fn load(client: &Client, base_url: &str, league_id: &str) -> Result<Self> {
        let league = http::get_league(client, base_url, league_id).await?;
        let players = http::get_players(client, base_url).await?;
        let rosters = http::get_rosters(client, base_url, league_id).await?;
        let users = http::get_users(client, base_url, league_id).await?;

        info!(
            league_id,
            players = players.len(),
            rosters = rosters.len(),
            users = users.len(),
            "league data loaded"
        );

        Ok(Self {
            league,
            players,
            roster_lookup: build_roster_lookup(&rosters),
            user_lookup: build_user_lookup(users),
        })
    }

    /// Assemble from already-fetched pieces. Used by tests and anything that
    /// wants to drive the formatter without a live session.
    pub fn from_parts(
        league: League,
        players: HashMap<String, Player>,
        rosters: &[Roster],
        users: Vec<User>,
    ) -> Self {
        Self {
            league,
            players,
            roster_lookup: build_roster_lookup(rosters),
            user_lookup: build_user_lookup(users),
        }
    }

    pub fn player(&self, id: &str) -> Result<&Player> {
        self.players
            .get(id)
            .ok_or_else(|| ReporterError::UnknownPlayer { id: id.to_string() })
    }

    /// Look up a roster by either of its keys (roster id or owner id).
    pub fn roster(&self, key: &str) -> Result<&Roster> {
        self.roster_lookup
            .get(key)
            .ok_or_else(|| ReporterError::UnknownRoster {
                key: key.to_string(),
            })
    }

    pub fn user(&self, id: &str) -> Result<&User> {
        self.user_lookup
            .get(id)
            .ok_or_else(|| ReporterError::UnknownUser { id: id.to_string() })
    }

    /// Resolve roster key -> owning user -> display name.
    pub fn team_for_roster_key(&self, key: &str) -> Result<&str> {
        let roster = self.roster(key)?;
        let owner_id = roster
            .owner_id
            .as_deref()
            .ok_or_else(|| ReporterError::UnknownUser {
                id: format!("owner of roster {}", roster.roster_id),
            })?;
        Ok(self.user(owner_id)?.team_name())
    }

    /// Resolve an acting user id to a display name.
    pub fn team_for_user(&self, user_id: &str) -> Result<&str> {
        Ok(self.user(user_id)?.team_name())
    }
}

/// Insert every roster under both its roster id and its owner id.
/// Re-running over the same input overwrites in place; last write wins.
fn build_roster_lookup(rosters: &[Roster]) -> HashMap<String, Roster> {
    let mut lookup = HashMap::new();
    for roster in rosters {
        lookup.insert(roster.roster_id.to_string(), roster.clone());
        if let Some(owner_id) = &roster.owner_id {
            lookup.insert(owner_id.clone(), roster.clone());
        }
    }
    lookup
}

fn build_user_lookup(users: Vec<User>) -> HashMap<String, User> {
    users.into_iter().map(|u| (u.user_id.clone(), u)).collect()
}
