use serde::{Deserialize, Serialize};
use std::collections::HashMap;


/// League metadata from `/v1/league/{league_id}`.
///
/// Held for completeness; the reporter only needs the league to exist.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One entry of the NFL player directory from `/v1/players/nfl`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub player_id: Option<String>,
    /// NFL team abbreviation; null for free agents and retired players.
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub fantasy_positions: Option<Vec<String>>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Roster from `/v1/league/{league_id}/rosters`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u64,
    /// Null when the roster slot is unclaimed.
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// League member from `/v1/league/{league_id}/users`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

impl User {
    /// Display name for reports: the custom team name when one is set,
    /// otherwise the account's display name, otherwise the raw user id.
    pub fn team_name(&self) -> &str {
        self.metadata
            .team_name
            .as_deref()
            .or(self.display_name.as_deref())
            .unwrap_or(&self.user_id)
    }
}

/// Transaction kind discriminator; Sleeper also emits `commissioner` moves,
/// which the reporter ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Trade,
    FreeAgent,
    Waiver,
    #[serde(other)]
    Other,
}

/// League transaction from `/v1/league/{league_id}/transactions/{week}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub status: Option<String>,
    /// Millisecond timestamp of the last status change; the poll ordering key.
    pub status_updated: i64,
    /// User id of the initiating manager; null for commissioner actions.
    #[serde(default)]
    pub creator: Option<String>,
    /// Player id -> receiving roster id. Absent and empty are equivalent.
    #[serde(default)]
    pub adds: Option<HashMap<String, u64>>,
    /// Player id -> releasing roster id. Absent and empty are equivalent.
    #[serde(default)]
    pub drops: Option<HashMap<String, u64>>,
    /// Only populated on trades.
    #[serde(default)]
    pub draft_picks: Vec<DraftPick>,
}

impl Transaction {
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("complete")
    }

    /// Added player ids paired with the receiving roster id.
    pub fn added(&self) -> impl Iterator<Item = (&String, u64)> + '_ {
        self.adds.iter().flatten().map(|(p, r)| (p, *r))
    }

    /// Dropped player ids.
    pub fn dropped(&self) -> impl Iterator<Item = &String> + '_ {
        self.drops.iter().flatten().map(|(p, _)| p)
    }
}

/// A tradable future draft selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftPick {
    pub season: String,
    pub round: u8,
    /// Roster id of the team receiving the pick.
    pub owner_id: u64,
    #[serde(default)]
    pub previous_owner_id: Option<u64>,
    /// Roster id whose original pick this is.
    #[serde(default)]
    pub roster_id: Option<u64>,
}
