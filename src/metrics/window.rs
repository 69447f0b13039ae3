use std::collections::BTreeMap;

use crate::error::MetricsError;

use super::{LatencyHistogram, ResultRecord};

/// Accumulator for one reporting interval.
///
/// Owned by the collector task only; a new window replaces it on every tick.
#[derive(Debug)]
pub struct MetricsWindow {
    client: LatencyHistogram,
    server: LatencyHistogram,
    labels: BTreeMap<String, LatencyHistogram>,
    requests: u64,
}

impl MetricsWindow {
    /// Create an empty window.
    ///
    /// # Errors
    ///
    /// Returns an error if a histogram cannot be created.
    pub fn new() -> Result<Self, MetricsError> {
        Ok(Self {
            client: LatencyHistogram::new()?,
            server: LatencyHistogram::new()?,
            labels: BTreeMap::new(),
            requests: 0,
        })
    }

    /// Fold one result into the window.
    ///
    /// # Errors
    ///
    /// Returns an error if a histogram rejects a sample.
    pub fn record(&mut self, record: &ResultRecord) -> Result<(), MetricsError> {
        self.client.record(record.total_latency_ns())?;
        for (label, value) in &record.server_metrics {
            match self.labels.get_mut(label) {
                Some(hist) => hist.record(*value)?,
                None => {
                    let mut hist = LatencyHistogram::new()?;
                    hist.record(*value)?;
                    self.labels.insert(label.clone(), hist);
                }
            }
        }
        self.server.record(record.server_total_ns())?;
        self.requests = self.requests.saturating_add(1);
        Ok(())
    }

    #[must_use]
    pub const fn requests(&self) -> u64 {
        self.requests
    }

    #[must_use]
    pub const fn client(&self) -> &LatencyHistogram {
        &self.client
    }

    #[must_use]
    pub const fn server(&self) -> &LatencyHistogram {
        &self.server
    }

    #[must_use]
    pub fn label(&self, name: &str) -> Option<&LatencyHistogram> {
        self.labels.get(name)
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, &LatencyHistogram)> {
        self.labels.iter().map(|(name, hist)| (name.as_str(), hist))
    }
}
