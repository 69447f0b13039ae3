use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::error::MetricsError;

use super::{Aggregator, ResultRecord, Snapshot};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Destination for the snapshot produced at every reporting tick.
pub trait SnapshotSink: Send {
    /// Publish one snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot cannot be delivered; the collector
    /// stops on the first failure.
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), MetricsError>;
}

impl SnapshotSink for mpsc::UnboundedSender<Snapshot> {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), MetricsError> {
        self.send(snapshot.clone())
            .map_err(|_closed| MetricsError::SinkClosed)
    }
}

/// Spawns the collector task that owns the metrics window.
///
/// The task alternates between folding incoming results into the window and
/// flushing a snapshot to `sink` every `interval`. It returns `Ok(())` once
/// every result sender is dropped and stops early on any histogram or sink
/// error.
#[must_use]
pub fn setup_metrics_collector<S>(
    interval: Duration,
    results_rx: mpsc::Receiver<ResultRecord>,
    sink: S,
) -> JoinHandle<Result<(), MetricsError>>
where
    S: SnapshotSink + 'static,
{
    tokio::spawn(run_collector(interval, results_rx, sink))
}

async fn run_collector<S>(
    interval: Duration,
    mut results_rx: mpsc::Receiver<ResultRecord>,
    mut sink: S,
) -> Result<(), MetricsError>
where
    S: SnapshotSink,
{
    let interval = interval.max(MIN_INTERVAL);
    let start = Instant::now();
    let mut aggregator = Aggregator::new(start)?;
    let first_tick = start.checked_add(interval).unwrap_or(start);
    let mut ticker = tokio::time::interval_at(first_tick, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = aggregator.flush(Instant::now())?;
                log_labels(&snapshot);
                sink.publish(&snapshot)?;
            },
            maybe_record = results_rx.recv() => {
                match maybe_record {
                    Some(record) => aggregator.record(&record)?,
                    None => {
                        tracing::debug!("All result senders dropped; stopping collector.");
                        return Ok(());
                    }
                }
            },
        }
    }
}

fn log_labels(snapshot: &Snapshot) {
    tracing::debug!(
        requests = snapshot.requests,
        elapsed = ?snapshot.elapsed,
        rps = snapshot.rps,
        "Reporting interval closed"
    );
    for (label, summary) in &snapshot.labels {
        tracing::debug!(
            label = label.as_str(),
            samples = summary.samples,
            mean = ?summary.mean,
            p99 = ?summary.p99,
            "Server metric"
        );
    }
}
