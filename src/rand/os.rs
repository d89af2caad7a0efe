//! Operating-system CSPRNG.

use super::{EntropyError, EntropySource};

/// The platform CSPRNG via `getrandom` (getrandom(2), getentropy,
/// ProcessPrng...). Zero-sized; construct one wherever it is needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(EntropyError::Unavailable)
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn source_name() -> &'static str {
    "getrandom(2)"
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "openbsd"))]
pub fn source_name() -> &'static str {
    "getentropy"
}

#[cfg(windows)]
pub fn source_name() -> &'static str {
    "ProcessPrng"
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "openbsd",
    windows
)))]
pub fn source_name() -> &'static str {
    "OS CSPRNG"
}
