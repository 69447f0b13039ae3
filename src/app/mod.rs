//! Wires the input pool, worker pool, collector and display into one run.
mod runner;
mod settings;


pub use runner::{Harness, RESULT_CHANNEL_CAPACITY};
pub use settings::RunSettings;
