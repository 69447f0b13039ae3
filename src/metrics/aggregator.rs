use std::time::Duration;

use tokio::time::Instant;

use crate::error::MetricsError;

use super::{MetricsWindow, ResultRecord, Snapshot};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Requests per second over `elapsed`, truncated to a whole number.
#[must_use]
pub fn requests_per_second(requests: u64, elapsed: Duration) -> u64 {
    u128::from(requests)
        .saturating_mul(NANOS_PER_SEC)
        .checked_div(elapsed.as_nanos())
        .map_or(0, |rps| u64::try_from(rps).unwrap_or(u64::MAX))
}

/// Current window plus the time it was opened.
#[derive(Debug)]
pub struct Aggregator {
    window: MetricsWindow,
    last_tick: Instant,
}

impl Aggregator {
    /// Start an empty window at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window histograms cannot be created.
    pub fn new(now: Instant) -> Result<Self, MetricsError> {
        Ok(Self {
            window: MetricsWindow::new()?,
            last_tick: now,
        })
    }

    /// Add one result to the current window.
    ///
    /// # Errors
    ///
    /// Returns an error if a histogram rejects a sample.
    pub fn record(&mut self, record: &ResultRecord) -> Result<(), MetricsError> {
        self.window.record(record)
    }

    /// Compute the current statistics without resetting.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let elapsed = now.saturating_duration_since(self.last_tick);
        let requests = self.window.requests();
        Snapshot {
            requests,
            elapsed,
            rps: requests_per_second(requests, elapsed),
            client: self.window.client().summary(),
            server: self.window.server().summary(),
            labels: self
                .window
                .labels()
                .map(|(name, hist)| (name.to_owned(), hist.summary()))
                .collect(),
        }
    }

    /// Close the current window at `now` and open an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement window cannot be created.
    pub fn flush(&mut self, now: Instant) -> Result<Snapshot, MetricsError> {
        let next = MetricsWindow::new()?;
        let snapshot = self.snapshot(now);
        self.window = next;
        self.last_tick = now;
        Ok(snapshot)
    }

    #[must_use]
    pub const fn window(&self) -> &MetricsWindow {
        &self.window
    }

    #[must_use]
    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }
}
