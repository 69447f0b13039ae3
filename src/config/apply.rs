use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{BenchArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line or through the environment win over
/// the file; the file wins over built-in defaults.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_explicit(matches, "package")
        && let Some(package) = config.package.clone()
    {
        args.package = package;
    }

    if !is_explicit(matches, "rule")
        && let Some(rule) = config.rule.clone()
    {
        args.rule = rule;
    }

    if !is_explicit(matches, "workers")
        && let Some(workers) = config.workers
    {
        args.workers = ensure_positive_usize(workers, "workers")?;
    }

    if !is_explicit(matches, "interval")
        && let Some(interval) = config.interval.as_ref()
    {
        args.interval = to_duration(interval, "interval")?;
    }

    if !is_explicit(matches, "inputs")
        && let Some(inputs) = config.inputs
    {
        args.inputs = ensure_positive_usize(inputs, "inputs")?;
    }

    if !is_explicit(matches, "paths")
        && let Some(paths) = config.paths
    {
        args.paths = ensure_positive_usize(paths, "paths")?;
    }

    if !is_explicit(matches, "users")
        && let Some(users) = config.users
    {
        args.users = ensure_positive_usize(users, "users")?;
    }

    if !is_explicit(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = Some(to_duration(timeout, "timeout")?);
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}
