use std::convert::Infallible;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::{AppError, AppResult, MetricsError};
use crate::http::{DecisionClient, spawn_workers};
use crate::input::InputPool;
use crate::metrics::{ResultRecord, SnapshotSink, setup_metrics_collector};

/// Capacity of the worker-to-collector channel. One slot keeps a paused
/// collector from letting workers run ahead of it.
pub const RESULT_CHANNEL_CAPACITY: usize = 1;

/// One benchmark run: a shared client and input pool, a worker count, a
/// reporting interval and the sink that receives each snapshot.
pub struct Harness<C: ?Sized, S> {
    client: Arc<C>,
    pool: InputPool,
    sink: S,
    workers: NonZeroUsize,
    interval: Duration,
}

impl<C, S> Harness<C, S>
where
    C: DecisionClient + ?Sized + 'static,
    S: SnapshotSink + 'static,
{
    #[must_use]
    pub const fn new(
        client: Arc<C>,
        pool: InputPool,
        sink: S,
        workers: NonZeroUsize,
        interval: Duration,
    ) -> Self {
        Self {
            client,
            pool,
            sink,
            workers,
            interval,
        }
    }

    /// Run until the first failure.
    ///
    /// A run has no natural end: it stops when any worker fails a request or
    /// when the collector stops (sink or histogram error). Remaining tasks are
    /// aborted before returning.
    ///
    /// # Errors
    ///
    /// Always returns the error that ended the run.
    pub async fn run(self) -> AppResult<Infallible> {
        let (results_tx, results_rx) = mpsc::channel::<ResultRecord>(RESULT_CHANNEL_CAPACITY);
        let mut collector = setup_metrics_collector(self.interval, results_rx, self.sink);
        let mut workers = spawn_workers(self.workers, &self.client, &self.pool, &results_tx);
        drop(results_tx);

        let err = tokio::select! {
            joined = &mut collector => match joined {
                Ok(Ok(())) => AppError::metrics(MetricsError::WorkersExited),
                Ok(Err(err)) => AppError::metrics(err),
                Err(err) => AppError::from(err),
            },
            Some(joined) = workers.join_next() => match joined {
                Ok(Ok(never)) => match never {},
                Ok(Err(err)) => err,
                Err(err) => AppError::from(err),
            },
        };

        workers.abort_all();
        collector.abort();
        tracing::debug!("Benchmark tasks stopped");
        Err(err)
    }
}
