//! Synthetic authorization inputs sampled by the request workers.
mod generator;
mod identifier;
mod types;

#[cfg(test)]
mod tests;

pub use generator::{InputPool, PoolSizes, generate_inputs};
pub use identifier::random_identifier;
pub use types::{DecisionRequest, Method, SyntheticInput};
