use thiserror::Error;

use crate::rand::EntropyError;

/// Longest password `generate` will build.
pub const MAX_LENGTH: usize = 1 << 16;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PassError {
    /// Requested length was zero or negative.
    #[error("Password length must be a positive number (got {0}).")]
    InvalidLength(i64),

    /// Length text that is not an integer at all.
    #[error("Please enter a valid integer (got {0:?}).")]
    NotANumber(String),

    /// Longer than [`MAX_LENGTH`], or more than the allocator would give.
    #[error("Password length {length} is too long (maximum {max}).")]
    TooLong { length: usize, max: usize },

    /// Internal invariant violation: a mode activated no class.
    #[error("Character pool is empty. Select at least one type.")]
    EmptyCharacterPool,

    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Parse user-supplied length text. Surrounding whitespace is ignored.
pub fn parse_length(input: &str) -> Result<usize, PassError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| PassError::NotANumber(trimmed.to_string()))?;

    if value <= 0 {
        return Err(PassError::InvalidLength(value));
    }
    match usize::try_from(value) {
        Ok(length) if length <= MAX_LENGTH => Ok(length),
        _ => Err(PassError::TooLong {
            length: usize::try_from(value).unwrap_or(usize::MAX),
            max: MAX_LENGTH,
        }),
    }
}
