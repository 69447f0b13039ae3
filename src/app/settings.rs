use std::num::NonZeroUsize;
use std::time::Duration;

use reqwest::Url;

use crate::args::BenchArgs;
use crate::error::AppResult;
use crate::http::build_endpoint;
use crate::input::PoolSizes;

/// Fully validated run parameters derived from CLI and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub endpoint: Url,
    pub workers: NonZeroUsize,
    pub interval: Duration,
    pub pool: PoolSizes,
    pub timeout: Option<Duration>,
}

impl RunSettings {
    /// Resolve the decision endpoint and pool sizes from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the target URL or policy path is invalid.
    pub fn from_args(args: &BenchArgs) -> AppResult<Self> {
        let endpoint = build_endpoint(&args.url, &args.package, &args.rule)?;
        Ok(Self {
            endpoint,
            workers: args.workers.non_zero(),
            interval: args.interval,
            pool: PoolSizes {
                inputs: args.inputs.non_zero(),
                paths: args.paths.non_zero(),
                users: args.users.non_zero(),
            },
            timeout: args.timeout,
        })
    }
}
