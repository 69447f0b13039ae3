//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::BenchArgs;
pub use defaults::{DEFAULT_PACKAGE, DEFAULT_RULE, DEFAULT_URL};
pub use types::PositiveUsize;

pub(crate) use parsers::parse_duration_value;
#[cfg(test)]
pub(crate) use test_support::parse_test_args;
