use std::fmt;
use std::time::Duration;

use crate::metrics::{HistogramSummary, Snapshot};

/// Which latency histogram a column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Client-observed end-to-end latency.
    Client,
    /// Summed server-reported timings.
    Server,
}

impl Source {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Source::Client => "cli",
            Source::Server => "opa",
        }
    }

    const fn summary(self, snapshot: &Snapshot) -> &HistogramSummary {
        match self {
            Source::Client => &snapshot.client,
            Source::Server => &snapshot.server,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Mean,
    P90,
    P99,
    P999,
}

impl Stat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stat::Mean => "mean",
            Stat::P90 => "90%",
            Stat::P99 => "99%",
            Stat::P999 => "99.9%",
        }
    }

    const fn pick(self, summary: &HistogramSummary) -> Duration {
        match self {
            Stat::Mean => summary.mean,
            Stat::P90 => summary.p90,
            Stat::P99 => summary.p99,
            Stat::P999 => summary.p999,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Rps,
    Latency { source: Source, stat: Stat },
}

pub const DEFAULT_COLUMNS: [Column; 9] = [
    Column::Rps,
    Column::Latency {
        source: Source::Client,
        stat: Stat::Mean,
    },
    Column::Latency {
        source: Source::Client,
        stat: Stat::P90,
    },
    Column::Latency {
        source: Source::Client,
        stat: Stat::P99,
    },
    Column::Latency {
        source: Source::Client,
        stat: Stat::P999,
    },
    Column::Latency {
        source: Source::Server,
        stat: Stat::Mean,
    },
    Column::Latency {
        source: Source::Server,
        stat: Stat::P90,
    },
    Column::Latency {
        source: Source::Server,
        stat: Stat::P99,
    },
    Column::Latency {
        source: Source::Server,
        stat: Stat::P999,
    },
];

impl Column {
    /// Cell text for this column.
    #[must_use]
    pub fn value(self, snapshot: &Snapshot) -> String {
        match self {
            Column::Rps => snapshot.rps.to_string(),
            Column::Latency { source, stat } => {
                format_latency(stat.pick(source.summary(snapshot)))
            }
        }
    }
}

/// Human duration such as `1.5ms` or `500µs`; zero prints as `0s`.
fn format_latency(latency: Duration) -> String {
    if latency.is_zero() {
        return "0s".to_owned();
    }
    format!("{:?}", latency)
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Rps => f.write_str("rps"),
            Column::Latency { source, stat } => {
                write!(f, "{}({})", source.as_str(), stat.as_str())
            }
        }
    }
}
