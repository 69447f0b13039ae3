use std::collections::BTreeMap;
use std::time::Duration;

/// Outcome of one successful evaluation, handed from a worker to the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub total_latency: Duration,
    /// Server-reported timings in nanoseconds, keyed by label.
    pub server_metrics: BTreeMap<String, u64>,
}

impl ResultRecord {
    #[must_use]
    pub fn total_latency_ns(&self) -> u64 {
        u64::try_from(self.total_latency.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Sum of all server-reported timings.
    #[must_use]
    pub fn server_total_ns(&self) -> u64 {
        self.server_metrics
            .values()
            .fold(0u64, |sum, value| sum.saturating_add(*value))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistogramSummary {
    pub samples: u64,
    pub mean: Duration,
    pub p90: Duration,
    pub p99: Duration,
    pub p999: Duration,
}

/// Statistics for one reporting interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub requests: u64,
    pub elapsed: Duration,
    pub rps: u64,
    /// Client-observed end-to-end latency.
    pub client: HistogramSummary,
    /// Sum of server-reported timings per request.
    pub server: HistogramSummary,
    pub labels: BTreeMap<String, HistogramSummary>,
}
