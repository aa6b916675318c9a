use reqwest::Client;
use std::collections::HashMap;

use super::types::{League, Player, Roster, Transaction, User};
use crate::Result;


/// Base path for the read-only, unauthenticated Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Fetch league metadata.
pub async fn get_league(client: &Client, base_url: &str, league_id: &str) -> Result<League> {
    let url = format!("{base_url}/league/{league_id}");
    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<League>()
        .await?;

    Ok(res)
}

/// Fetch the full NFL player directory, keyed by player id.
///
/// Large response (several MB); fetched once per session.
pub async fn get_players(client: &Client, base_url: &str) -> Result<HashMap<String, Player>> {
    let url = format!("{base_url}/players/nfl");
    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<HashMap<String, Player>>()
        .await?;

    Ok(res)
}

/// Fetch the league's rosters.
pub async fn get_rosters(client: &Client, base_url: &str, league_id: &str) -> Result<Vec<Roster>> {
    let url = format!("{base_url}/league/{league_id}/rosters");
    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Roster>>()
        .await?;

    Ok(res)
}

/// Fetch the league's members.
pub async fn get_users(client: &Client, base_url: &str, league_id: &str) -> Result<Vec<User>> {
    let url = format!("{base_url}/league/{league_id}/users");
    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<User>>()
        .await?;

    Ok(res)
}

/// Fetch one week's transactions.
pub async fn get_transactions(
    client: &Client,
    base_url: &str,
    league_id: &str,
    week: u32,
) -> Result<Vec<Transaction>> {
    let url = format!("{base_url}/league/{league_id}/transactions/{week}");
    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Transaction>>()
        .await?;

    Ok(res)
}
