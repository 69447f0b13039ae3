use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read random bytes for identifier: {source}")]
    Entropy {
        #[source]
        source: rand::Error,
    },
    #[error("Input pool must not be empty.")]
    EmptyPool,
}
