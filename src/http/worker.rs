use std::convert::Infallible;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::error::{AppResult, InputError, MetricsError, RequestError};
use crate::input::{InputPool, SyntheticInput};
use crate::metrics::ResultRecord;

use super::{DecisionClient, encode_request};

/// Evaluate one input and time the exchange, response decode included.
///
/// The request body is encoded before the clock starts.
///
/// # Errors
///
/// Returns the client's error unchanged.
pub async fn evaluate_once<C>(
    client: &C,
    input: &SyntheticInput,
) -> Result<ResultRecord, RequestError>
where
    C: DecisionClient + ?Sized,
{
    let body = encode_request(input)?;
    let start = Instant::now();
    let response = client.evaluate(body).await?;
    let total_latency = start.elapsed();
    Ok(ResultRecord {
        total_latency,
        server_metrics: response.metrics,
    })
}

/// Drive requests forever, forwarding every result to the collector.
///
/// Sending waits for channel capacity, so a slow collector stalls the worker
/// instead of dropping results.
///
/// # Errors
///
/// Never returns `Ok`. Returns the first request failure, or
/// `CollectorClosed` once the collector stops receiving.
pub async fn run_worker<C>(
    index: usize,
    client: Arc<C>,
    pool: InputPool,
    results_tx: mpsc::Sender<ResultRecord>,
) -> AppResult<Infallible>
where
    C: DecisionClient + ?Sized,
{
    let mut rng = StdRng::from_entropy();
    tracing::debug!(worker = index, "Worker started");
    loop {
        let input = pool.pick(&mut rng).ok_or(InputError::EmptyPool)?;
        let record = match evaluate_once(client.as_ref(), input).await {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(worker = index, "Request failed: {}", err);
                return Err(err.into());
            }
        };
        if results_tx.send(record).await.is_err() {
            tracing::debug!(worker = index, "Collector closed; stopping worker");
            return Err(MetricsError::CollectorClosed.into());
        }
    }
}
