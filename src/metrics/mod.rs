//! Windowed latency aggregation for the reporting loop.
mod aggregator;
mod collector;
mod histogram;
mod types;
mod window;


pub use aggregator::{Aggregator, requests_per_second};
pub use collector::{SnapshotSink, setup_metrics_collector};
pub use histogram::LatencyHistogram;
pub use types::{HistogramSummary, ResultRecord, Snapshot};
pub use window::MetricsWindow;
