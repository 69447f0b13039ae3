use std::convert::Infallible;
use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::AppResult;
use crate::input::InputPool;
use crate::metrics::ResultRecord;

use super::{DecisionClient, run_worker};

/// Start `count` workers sharing one client, one input pool and one channel.
pub fn spawn_workers<C>(
    count: NonZeroUsize,
    client: &Arc<C>,
    pool: &InputPool,
    results_tx: &mpsc::Sender<ResultRecord>,
) -> JoinSet<AppResult<Infallible>>
where
    C: DecisionClient + ?Sized + 'static,
{
    let mut workers = JoinSet::new();
    for index in 0..count.get() {
        workers.spawn(run_worker(
            index,
            Arc::clone(client),
            pool.clone(),
            results_tx.clone(),
        ));
    }
    tracing::info!(workers = count.get(), "Workers started");
    workers
}
