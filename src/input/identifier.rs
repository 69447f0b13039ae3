use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Builder;

use crate::error::InputError;

/// Generate a random version-4 identifier from the operating system CSPRNG.
///
/// # Errors
///
/// Returns an error when the operating system cannot provide entropy.
pub fn random_identifier() -> Result<String, InputError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| InputError::Entropy { source: err })?;
    Ok(format_identifier(bytes))
}

pub(super) fn format_identifier(bytes: [u8; 16]) -> String {
    // Builder sets the version nibble to 4 and the variant bits to 10.
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
