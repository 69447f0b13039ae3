//! Core library for the `policyload` CLI.
//!
//! `policyload` drives a policy-evaluation service with synthetic
//! authorization checks from a pool of concurrent workers and prints, for
//! every reporting interval, throughput plus client-observed and
//! server-reported latency percentiles. The modules below are the building
//! blocks of that binary; the CLI is the primary interface.
pub mod app;
pub mod args;
pub mod config;
pub mod display;
mod entry;
pub mod error;
pub mod http;
pub mod input;
pub mod metrics;
mod system;

pub use entry::run;
