//! Unit tests for the scan loop state machine

use super::*;
use crate::ReporterError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts ticks and returns instantly.
#[derive(Default)]
struct InstantClock {
    ticks: AtomicU64,
}

#[async_trait]
impl Clock for InstantClock {
    async fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scan body that fails a fixed number of times before succeeding.
struct FlakyScan {
    calls: u64,
    failures_remaining: u64,
}

impl FlakyScan {
    fn new(failures: u64) -> Self {
        Self {
            calls: 0,
            failures_remaining: failures,
        }
    }
}

#[async_trait]
impl Scan for FlakyScan {
    async fn scan_once(&mut self) -> crate::Result<ScanOutcome> {
        self.calls += 1;
        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return Err(ReporterError::social("transient"));
        }
        Ok(ScanOutcome {
            new_transactions: 0,
            total_transactions: 0,
            rumors: 0,
        })
    }
}

#[cfg(test)]
mod loop_tests {
    use super::*;

    #[tokio::test]
    async fn test_runs_exactly_reset_count_scans() {
        let clock = InstantClock::default();
        let mut scan = FlakyScan::new(0);

        let completed = ScanLoop::new(3, 2).run(&clock, &mut scan).await.unwrap();

        assert_eq!(completed, 3);
        assert_eq!(scan.calls, 3);
        // Two countdown ticks before every scan, nothing after the last one.
        assert_eq!(clock.ticks.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_failed_scan_retries_without_counting() {
        let clock = InstantClock::default();
        let mut scan = FlakyScan::new(2);

        let completed = ScanLoop::new(1, 1).run(&clock, &mut scan).await.unwrap();

        assert_eq!(completed, 1);
        // Two failures plus the eventual success.
        assert_eq!(scan.calls, 3);
        // Each retry sits out a fresh wait phase.
        assert_eq!(clock.ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_wait_scans_immediately() {
        let clock = InstantClock::default();
        let mut scan = FlakyScan::new(0);

        let completed = ScanLoop::new(2, 0).run(&clock, &mut scan).await.unwrap();

        assert_eq!(completed, 2);
        assert_eq!(clock.ticks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_reset_count_never_scans() {
        let clock = InstantClock::default();
        let mut scan = FlakyScan::new(0);

        let completed = ScanLoop::new(0, 5).run(&clock, &mut scan).await.unwrap();

        assert_eq!(completed, 0);
        assert_eq!(scan.calls, 0);
        assert_eq!(clock.ticks.load(Ordering::SeqCst), 0);
    }
}

#[cfg(test)]
mod countdown_tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "0:00:00");
        assert_eq!(format_countdown(59), "0:00:59");
        assert_eq!(format_countdown(3600), "1:00:00");
        assert_eq!(format_countdown(3661), "1:01:01");
        assert_eq!(format_countdown(86399), "23:59:59");
    }
}
