use std::num::NonZeroUsize;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::InputError;

use super::identifier::random_identifier;
use super::types::{Method, SyntheticInput};

/// First segment of every generated resource path.
const RESOURCE_PREFIX: &str = "resources";

/// Sizes of the input pool and of the path and user pools it samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSizes {
    pub inputs: NonZeroUsize,
    pub paths: NonZeroUsize,
    pub users: NonZeroUsize,
}

/// Build `sizes.inputs` synthetic inputs.
///
/// Paths and users are generated once into their own pools and every output
/// record samples one method, one path and one user independently.
///
/// # Errors
///
/// Returns an error when identifier generation cannot read entropy.
pub fn generate_inputs<R>(sizes: PoolSizes, rng: &mut R) -> Result<Vec<SyntheticInput>, InputError>
where
    R: Rng + ?Sized,
{
    let paths = (0..sizes.paths.get())
        .map(|_| random_identifier().map(|id| vec![RESOURCE_PREFIX.to_owned(), id]))
        .collect::<Result<Vec<_>, _>>()?;
    let users = (0..sizes.users.get())
        .map(|_| random_identifier())
        .collect::<Result<Vec<_>, _>>()?;

    let mut inputs = Vec::with_capacity(sizes.inputs.get());
    for _ in 0..sizes.inputs.get() {
        let method = Method::ALL.choose(rng).copied().ok_or(InputError::EmptyPool)?;
        let path = paths.choose(rng).cloned().ok_or(InputError::EmptyPool)?;
        let user = users.choose(rng).cloned().ok_or(InputError::EmptyPool)?;
        inputs.push(SyntheticInput { method, path, user });
    }
    Ok(inputs)
}

/// Immutable input pool shared by every worker.
#[derive(Debug, Clone)]
pub struct InputPool {
    inputs: Arc<[SyntheticInput]>,
}

impl InputPool {
    /// Wrap an already generated set of inputs.
    ///
    /// # Errors
    ///
    /// Returns an error when `inputs` is empty.
    pub fn new(inputs: Vec<SyntheticInput>) -> Result<Self, InputError> {
        if inputs.is_empty() {
            return Err(InputError::EmptyPool);
        }
        Ok(Self {
            inputs: inputs.into(),
        })
    }

    /// Generate a pool with the given sizes.
    ///
    /// # Errors
    ///
    /// Returns an error when identifier generation fails.
    pub fn generate<R>(sizes: PoolSizes, rng: &mut R) -> Result<Self, InputError>
    where
        R: Rng + ?Sized,
    {
        Self::new(generate_inputs(sizes, rng)?)
    }

    /// Pick one input uniformly at random.
    pub fn pick<R>(&self, rng: &mut R) -> Option<&SyntheticInput>
    where
        R: Rng + ?Sized,
    {
        self.inputs.choose(rng)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SyntheticInput] {
        &self.inputs
    }
}
