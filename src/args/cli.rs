use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_INPUTS, DEFAULT_INTERVAL, DEFAULT_PACKAGE, DEFAULT_PATHS, DEFAULT_RULE, DEFAULT_URL,
    DEFAULT_USERS, DEFAULT_WORKERS,
};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Load generator for policy-evaluation services: posts synthetic authorization checks and reports throughput with client and server latency percentiles."
)]
pub struct BenchArgs {
    /// Base URL of the policy service
    #[arg(long, short, env = "POLICYLOAD_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Policy package, '/'-separated for nested packages
    #[arg(long, short, env = "POLICYLOAD_PACKAGE", default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Rule evaluated inside the package
    #[arg(long, short, env = "POLICYLOAD_RULE", default_value = DEFAULT_RULE)]
    pub rule: String,

    /// Number of concurrent request workers
    #[arg(
        long,
        short = 'w',
        env = "POLICYLOAD_WORKERS",
        default_value = DEFAULT_WORKERS,
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Reporting interval (supports ms/s/m/h)
    #[arg(
        long,
        short = 'i',
        env = "POLICYLOAD_INTERVAL",
        default_value = DEFAULT_INTERVAL,
        value_parser = parse_duration_arg
    )]
    pub interval: Duration,

    /// Number of pre-generated inputs
    #[arg(
        long,
        env = "POLICYLOAD_INPUTS",
        default_value = DEFAULT_INPUTS,
        value_parser = parse_positive_usize
    )]
    pub inputs: PositiveUsize,

    /// Number of distinct resource paths inputs are drawn from
    #[arg(
        long,
        env = "POLICYLOAD_PATHS",
        default_value = DEFAULT_PATHS,
        value_parser = parse_positive_usize
    )]
    pub paths: PositiveUsize,

    /// Number of distinct users inputs are drawn from
    #[arg(
        long,
        env = "POLICYLOAD_USERS",
        default_value = DEFAULT_USERS,
        value_parser = parse_positive_usize
    )]
    pub users: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h); unset waits indefinitely
    #[arg(long, short = 't', env = "POLICYLOAD_TIMEOUT", value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Path to config file (TOML or JSON)
    #[arg(long, short, env = "POLICYLOAD_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging, including per-label server metrics
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
