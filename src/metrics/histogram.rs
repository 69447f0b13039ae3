use std::time::Duration;

use hdrhistogram::Histogram;

use crate::error::MetricsError;

use super::HistogramSummary;

const SIGNIFICANT_FIGURES: u8 = 3;

/// Streaming latency histogram with nanosecond samples.
#[derive(Debug, Clone)]
pub struct LatencyHistogram {
    hist: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create an empty, auto-resizing histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created.
    pub fn new() -> Result<Self, MetricsError> {
        let hist = Histogram::<u64>::new(SIGNIFICANT_FIGURES).map_err(|err| {
            MetricsError::Histogram {
                context: "create",
                source: Box::new(err),
            }
        })?;
        Ok(Self { hist })
    }

    /// Record one sample in nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be recorded.
    pub fn record(&mut self, nanos: u64) -> Result<(), MetricsError> {
        self.hist
            .record(nanos)
            .map_err(|err| MetricsError::Histogram {
                context: "record",
                source: Box::new(err),
            })
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.hist.len()
    }

    /// Number of samples equivalent to `nanos` at the histogram's precision.
    #[must_use]
    pub fn count_at(&self, nanos: u64) -> u64 {
        self.hist.count_at(nanos)
    }

    #[must_use]
    pub fn summary(&self) -> HistogramSummary {
        if self.hist.is_empty() {
            return HistogramSummary::default();
        }

        HistogramSummary {
            samples: self.hist.len(),
            mean: Duration::from_nanos(self.hist.mean() as u64),
            p90: Duration::from_nanos(self.hist.value_at_quantile(0.9)),
            p99: Duration::from_nanos(self.hist.value_at_quantile(0.99)),
            p999: Duration::from_nanos(self.hist.value_at_quantile(0.999)),
        }
    }
}
