//! Decision requests and the worker pool that drives them.
mod client;
mod endpoint;
mod pool;
mod worker;


pub use client::{DecisionClient, DecisionResponse, HttpDecisionClient, encode_request};
pub use endpoint::build_endpoint;
pub use pool::spawn_workers;
pub use worker::{evaluate_once, run_worker};
