//! Random selection backed by a cryptographically secure entropy source.

mod os;

use thiserror::Error;
use zeroize::Zeroize;

pub use os::SystemEntropy;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    #[error("system entropy source unavailable: {0}")]
    Unavailable(getrandom::Error),
}

/// A source of cryptographically secure random bytes.
///
/// Only CSPRNGs belong behind this trait. General-purpose seeded generators
/// must not implement it outside of tests.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Name of the entropy backend, for display.
pub fn entropy_source() -> &'static str {
    os::source_name()
}

#[inline]
fn next_u64<E: EntropySource + ?Sized>(source: &mut E) -> Result<u64, EntropyError> {
    let mut bytes = [0u8; 8];
    source.fill_bytes(&mut bytes)?;
    let value = u64::from_le_bytes(bytes);
    bytes.zeroize();
    Ok(value)
}

/// Uniform index in `0..n`.
///
/// Draws 64-bit values and rejects the `2^64 mod n` lowest ones, so the
/// accepted range is an exact multiple of `n` and the reduction is unbiased.
pub fn index<E: EntropySource + ?Sized>(source: &mut E, n: usize) -> Result<usize, EntropyError> {
    debug_assert!(n > 0, "index range must be non-empty");

    let n = n as u64;
    let threshold = n.wrapping_neg() % n;

    loop {
        let r = next_u64(source)?;
        if r >= threshold {
            return Ok((r % n) as usize);
        }
    }
}

/// Pick one element of `alphabet` uniformly.
#[inline]
pub fn choose<E: EntropySource + ?Sized>(source: &mut E, alphabet: &[u8]) -> Result<u8, EntropyError> {
    Ok(alphabet[index(source, alphabet.len())?])
}
