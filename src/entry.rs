use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::{Harness, RunSettings};
use crate::args::BenchArgs;
use crate::config::{apply_config, load_config};
use crate::display::{DEFAULT_COLUMNS, TableDisplay};
use crate::error::AppResult;
use crate::http::HttpDecisionClient;
use crate::input::InputPool;
use crate::system::logger::init_logging;

/// Parse arguments, start the runtime and benchmark until the first failure.
///
/// # Errors
///
/// Returns the error that stopped the run; a run never ends successfully
/// unless help or version output was requested.
pub fn run() -> AppResult<()> {
    let matches = BenchArgs::command().get_matches();
    let args = BenchArgs::from_arg_matches(&matches)?;

    init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

async fn run_async(mut args: BenchArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }
    let settings = RunSettings::from_args(&args)?;

    tracing::info!(
        endpoint = %settings.endpoint,
        workers = settings.workers.get(),
        interval = ?settings.interval,
        "Starting benchmark"
    );

    let mut rng = StdRng::from_entropy();
    let pool = InputPool::generate(settings.pool, &mut rng)?;
    tracing::debug!(inputs = pool.len(), "Input pool generated");

    let client = Arc::new(HttpDecisionClient::new(
        settings.endpoint.clone(),
        settings.timeout,
    )?);

    let mut display = TableDisplay::new(std::io::stdout(), &DEFAULT_COLUMNS);
    display.print_header()?;

    let harness = Harness::new(client, pool, display, settings.workers, settings.interval);
    match harness.run().await {
        Ok(never) => match never {},
        Err(err) => {
            tracing::error!("Benchmark stopped: {}", err);
            Err(err)
        }
    }
}
