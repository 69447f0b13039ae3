use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Histogram error during {context}: {source}")]
    Histogram {
        context: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to write report: {source}")]
    Report {
        #[source]
        source: std::io::Error,
    },
    #[error("Metrics collector is no longer receiving results.")]
    CollectorClosed,
    #[error("Snapshot receiver was dropped.")]
    SinkClosed,
    #[error("All workers exited.")]
    WorkersExited,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
