//! Transaction Poller: re-fetches the league's whole transaction history and
//! reports the tail that grew since the previous poll.
//!
//! Delta detection is by count, not identity. It holds only for an
//! append-only upstream feed; a shrunk or reshuffled history silently skews
//! which transactions get reported.

use reqwest::Client;
use tracing::{debug, warn};

use crate::league::LeagueData;
use crate::report::{free_agent_report, trade_report, waiver_report};
use crate::sleeper::http::get_transactions;
use crate::sleeper::types::{Transaction, TransactionType};
use crate::social::SocialClient;
use crate::Result;


/// Weeks 0..20 are fetched every poll. The season length is fixed, not
/// derived from league metadata.
pub const TRANSACTION_WEEKS: u32 = 20;

/// Running transaction total carried across polls within one session.
#[derive(Debug, Default)]
pub struct TransactionPoller {
    total: usize,
}

impl TransactionPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Fetch all weeks, sort ascending by `status_updated`.
    pub async fn fetch_all(
        client: &Client,
        base_url: &str,
        league_id: &str,
    ) -> Result<Vec<Transaction>> {
        let mut all = Vec::new();
        for week in 0..TRANSACTION_WEEKS {
            all.extend(get_transactions(client, base_url, league_id, week).await?);
        }
        all.sort_by_key(|t| t.status_updated);
        Ok(all)
    }

    /// One poll: fetch, diff by count, report the last `delta` transactions.
    ///
    /// With `init` set the total is recorded and nothing is published.
    /// Returns the delta, which goes negative if the upstream feed shrank.
    pub async fn poll(
        &mut self,
        client: &Client,
        base_url: &str,
        league_id: &str,
        league: &LeagueData,
        social: &dyn SocialClient,
        init: bool,
    ) -> Result<i64> {
        let transactions = Self::fetch_all(client, base_url, league_id).await?;
        self.report_new(&transactions, league, social, init).await
    }

    /// Diff-and-dispatch over an already-fetched, sorted transaction list.
    pub async fn report_new(
        &mut self,
        transactions: &[Transaction],
        league: &LeagueData,
        social: &dyn SocialClient,
        init: bool,
    ) -> Result<i64> {
        let delta = transactions.len() as i64 - self.total as i64;
        self.total = transactions.len();

        if !init && delta > 0 {
            let start = transactions.len() - delta as usize;
            for transaction in &transactions[start..] {
                // One bad transaction must not abort the rest of the batch.
                if let Err(e) = report_transaction(league, social, transaction).await {
                    warn!(
                        status_updated = transaction.status_updated,
                        error = %e,
                        "transaction report failed"
                    );
                }
            }
        }

        Ok(delta)
    }
}

/// Format one transaction and publish the result if it is non-empty.
async fn report_transaction(
    league: &LeagueData,
    social: &dyn SocialClient,
    transaction: &Transaction,
) -> Result<()> {
    let text = match transaction.transaction_type {
        TransactionType::Trade => trade_report(league, transaction)?,
        TransactionType::FreeAgent => free_agent_report(league, transaction)?,
        // Pending and failed waiver claims are not news.
        TransactionType::Waiver if transaction.is_complete() => waiver_report(league, transaction)?,
        _ => {
            debug!(
                transaction_type = ?transaction.transaction_type,
                "skipping unreported transaction type"
            );
            return Ok(());
        }
    };

    if !text.is_empty() {
        social.publish(&text).await?;
    }
    Ok(())
}
