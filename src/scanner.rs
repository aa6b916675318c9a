//! Scan Loop: alternates Waiting (one-second countdown ticks) and Scanning
//! (one poll + rumor pass) until the configured scan count is reached.
//!
//! The clock and the scan body are both injected so tests can drive many
//! cycles without real delays.

use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;
use tracing::{error, info};

use crate::Result;

#[cfg(test)]
mod tests;

/// Source of one-second ticks.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn tick(&self);
}

/// Real wall-clock ticks via tokio.
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    async fn tick(&self) {
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

/// One scan iteration: poll transactions, intake rumors.
#[async_trait]
pub trait Scan: Send {
    async fn scan_once(&mut self) -> Result<ScanOutcome>;
}

/// What a single scan produced, for the per-scan log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    pub new_transactions: i64,
    pub total_transactions: usize,
    pub rumors: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Waiting { remaining: u64 },
    Scanning,
}

/// Fixed-interval driver. `reset_count` scans, `wait_seconds` of countdown
/// before each one.
pub struct ScanLoop {
    reset_count: u32,
    wait_seconds: u64,
}

impl ScanLoop {
    pub fn new(reset_count: u32, wait_seconds: u64) -> Self {
        Self {
            reset_count,
            wait_seconds,
        }
    }

    /// Drive the state machine to completion. Returns the number of
    /// completed scans (always `reset_count`; a failed scan is logged and
    /// retried after another wait without counting).
    pub async fn run<C, S>(&self, clock: &C, scanner: &mut S) -> Result<u32>
    where
        C: Clock,
        S: Scan,
    {
        let mut scan_count = 0u32;
        let mut state = ScanState::Waiting {
            remaining: self.wait_seconds,
        };

        while scan_count < self.reset_count {
            state = match state {
                ScanState::Waiting { remaining: 0 } => ScanState::Scanning,
                ScanState::Waiting { remaining } => {
                    print!(
                        "Scan count: {}/{}. Next scan in: {}\r",
                        scan_count,
                        self.reset_count,
                        format_countdown(remaining)
                    );
                    let _ = std::io::stdout().flush();
                    clock.tick().await;
                    ScanState::Waiting {
                        remaining: remaining - 1,
                    }
                }
                ScanState::Scanning => {
                    match scanner.scan_once().await {
                        Ok(outcome) => {
                            info!(
                                new = outcome.new_transactions,
                                total = outcome.total_transactions,
                                rumors = outcome.rumors,
                                "scan complete"
                            );
                            scan_count += 1;
                        }
                        Err(e) => {
                            // Failed scans do not count toward the reset.
                            error!(error = %e, "scan failed");
                        }
                    }
                    ScanState::Waiting {
                        remaining: self.wait_seconds,
                    }
                }
            };
        }

        Ok(scan_count)
    }
}

/// `h:mm:ss` countdown, hours unpadded.
fn format_countdown(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
