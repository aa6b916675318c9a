//! Rumor Intake: followers DM `RUMOR <text>` and the bot posts a randomized
//! paraphrase. The acknowledgment reply embeds the indicator token, which is
//! the whole dedup mechanism; the next scan stops collecting at that reply.

use rand::Rng;
use tracing::{debug, warn};

use crate::social::{Follower, SocialClient};
use crate::Result;

#[cfg(test)]
mod tests;

const RUMOR_PREFIX: &str = "RUMOR ";

/// Extract rumor text from a DM: case-insensitive `"RUMOR "` prefix,
/// remainder returned verbatim.
pub fn parse_rumor(text: &str) -> Option<&str> {
    let head = text.get(..RUMOR_PREFIX.len())?;
    if head.eq_ignore_ascii_case(RUMOR_PREFIX) {
        Some(&text[RUMOR_PREFIX.len()..])
    } else {
        None
    }
}

/// Wrap a rumor in one of the stock attributions, chosen uniformly at random.
///
/// Duplicate entries are intentional; they weight the selection exactly as
/// the phrase bank was originally tuned.
pub fn paraphrase<R: Rng>(rng: &mut R, rumor: &str) -> String {
    match rng.gen_range(0..8) {
        0 => format!("Anonymous sources are telling me \"{rumor}\""),
        1 => format!("A source within the league is telling me \"{rumor}\""),
        2 => format!("Sources within the league are telling me \"{rumor}\""),
        3 => format!("An anonymous source has told me \"{rumor}\""),
        4 => format!("An anonymous source is telling me \"{rumor}\""),
        5 => format!("Sources are telling me \"{rumor}\""),
        6 => format!("A reliable source has told me \"{rumor}\""),
        _ => format!("A reliable source has told me \"{rumor}\""),
    }
}

/// Scan every follower's DM feed for unprocessed rumors and publish them.
///
/// Each feed is read newest-first up to (not including) the first message
/// containing the indicator token; the collected messages are handled
/// oldest-first. One acknowledgment DM marks the new boundary. Returns the
/// number of rumor posts published.
pub async fn scan_dms<R: Rng>(
    social: &dyn SocialClient,
    followers: &[Follower],
    indicator: &str,
    rng: &mut R,
) -> Result<usize> {
    let mut posted = 0;

    for follower in followers {
        let events = social.dm_events(&follower.id).await?;

        let mut pending: Vec<&str> = Vec::new();
        for dm in &events {
            if dm.text.contains(indicator) {
                break;
            }
            pending.insert(0, &dm.text);
        }

        if !pending.is_empty() {
            social
                .send_dm(&follower.id, &format!("Got it! {indicator}"))
                .await?;
        }

        for message in pending {
            let Some(rumor) = parse_rumor(message) else {
                debug!(follower = %follower.id, "dm without rumor prefix skipped");
                continue;
            };

            let post = paraphrase(rng, rumor);
            match social.publish(&post).await {
                Ok(()) => posted += 1,
                Err(e) => warn!(follower = %follower.id, error = %e, "rumor post failed"),
            }
        }
    }

    Ok(posted)
}
