//! Report Formatter: pure functions from a transaction plus the cached
//! league lookups to publishable text. No side effects here; callers decide
//! whether a report gets published.

use crate::league::LeagueData;
use crate::sleeper::types::{DraftPick, Player, Transaction};
use crate::{ReporterError, Result};


/// `"<team> <primary position> <full name>"`, e.g. `"KC QB Patrick Mahomes"`.
///
/// A null team renders as `"FA"`; a player record with no name or no
/// position cannot be reported and errors out to the per-transaction tier.
pub fn format_player(player: &Player) -> Result<String> {
    let id = player.player_id.as_deref().unwrap_or("?");
    let name = player
        .full_name
        .as_deref()
        .ok_or_else(|| ReporterError::IncompletePlayer { id: id.to_string() })?;
    let position = player
        .fantasy_positions
        .as_deref()
        .and_then(|p| p.first())
        .ok_or_else(|| ReporterError::IncompletePlayer { id: id.to_string() })?;
    let team = player.team.as_deref().unwrap_or("FA");

    Ok(format!("{team} {position} {name}"))
}

/// `"a <season> <round><suffix> round draft pick"`.
///
/// Only rounds 1/2/3 get st/nd/rd; everything else gets th. Fantasy drafts
/// never reach the rounds where full English ordinal rules would diverge.
pub fn format_pick(pick: &DraftPick) -> String {
    let suffix = match pick.round {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("a {} {}{} round draft pick", pick.season, pick.round, suffix)
}

/// Human list join: `"A"`, `"A and B"`, `"A, B and C"`.
///
/// For three or more items the last element is rewritten in place with an
/// `" and "` prefix, then appended after the comma-joined rest.
pub fn format_list(mut items: Vec<String>) -> String {
    match items.len() {
        0 => String::new(),
        1 => items.remove(0),
        2 => items.join(" and "),
        _ => {
            if let Some(last) = items.last_mut() {
                *last = format!(" and {last}");
            }
            let last = items.pop().unwrap_or_default();
            format!("{}{}", items.join(", "), last)
        }
    }
}

/// Trade summary: `"Trade Alert!\n"` plus one
/// `"<team> will receive <assets>.\n"` line per receiving side.
///
/// Players and picks are grouped under the RECEIVING team, resolved through
/// the roster -> owner -> user chain. Teams appear in first-seen order;
/// added players are walked in player-id order so output is deterministic.
pub fn trade_report(league: &LeagueData, trade: &Transaction) -> Result<String> {
    let mut sides: Vec<(String, Vec<String>)> = Vec::new();

    let mut adds: Vec<(&String, u64)> = trade.added().collect();
    adds.sort_by(|a, b| a.0.cmp(b.0));
    for (player_id, roster_id) in adds {
        let team = league.team_for_roster_key(&roster_id.to_string())?;
        let asset = format_player(league.player(player_id)?)?;
        push_asset(&mut sides, team, asset);
    }

    for pick in &trade.draft_picks {
        let team = league.team_for_roster_key(&pick.owner_id.to_string())?;
        push_asset(&mut sides, team, format_pick(pick));
    }

    let mut text = String::from("Trade Alert!\n");
    for (team, assets) in sides {
        text.push_str(&format!("{team} will receive {}.\n", format_list(assets)));
    }
    Ok(text)
}

fn push_asset(sides: &mut Vec<(String, Vec<String>)>, team: &str, asset: String) {
    match sides.iter_mut().find(|(t, _)| t == team) {
        Some((_, assets)) => assets.push(asset),
        None => sides.push((team.to_string(), vec![asset])),
    }
}

/// Free-agent move: `"<team> has signed <adds> and released <drops>."` with
/// the signed/released clauses dropping out when the respective list is
/// empty. Both empty yields an empty string, which is never published.
pub fn free_agent_report(league: &LeagueData, transaction: &Transaction) -> Result<String> {
    roster_move_report(league, transaction, MoveKind::FreeAgent)
}

/// Waiver claim: like [`free_agent_report`] but the acquisition clause reads
/// `"claimed <adds> from waivers"`.
pub fn waiver_report(league: &LeagueData, transaction: &Transaction) -> Result<String> {
    roster_move_report(league, transaction, MoveKind::Waiver)
}

#[derive(Clone, Copy)]
enum MoveKind {
    FreeAgent,
    Waiver,
}

fn roster_move_report(
    league: &LeagueData,
    transaction: &Transaction,
    kind: MoveKind,
) -> Result<String> {
    let mut added: Vec<&String> = transaction.added().map(|(p, _)| p).collect();
    added.sort();
    let mut dropped: Vec<&String> = transaction.dropped().collect();
    dropped.sort();

    let adds = format_list(
        added
            .into_iter()
            .map(|id| format_player(league.player(id)?))
            .collect::<Result<Vec<_>>>()?,
    );
    let drops = format_list(
        dropped
            .into_iter()
            .map(|id| format_player(league.player(id)?))
            .collect::<Result<Vec<_>>>()?,
    );

    let creator = transaction
        .creator
        .as_deref()
        .ok_or(ReporterError::MissingCreator)?;
    let team = league.team_for_user(creator)?;

    let acquired = match kind {
        MoveKind::FreeAgent => format!("signed {adds}"),
        MoveKind::Waiver => format!("claimed {adds} from waivers"),
    };

    let text = match (adds.is_empty(), drops.is_empty()) {
        (false, false) => format!("{team} has {acquired} and released {drops}."),
        (false, true) => format!("{team} has {acquired}."),
        (true, false) => format!("{team} has released {drops}."),
        (true, true) => String::new(),
    };
    Ok(text)
}
