use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A generated password. The buffer is wiped on drop and `Debug` never
/// prints the contents.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Takes ownership of an ASCII buffer without copying it.
    pub(crate) fn from_ascii(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.is_ascii());
        // Safety: every alphabet in `charset` is ASCII
        Self(unsafe { String::from_utf8_unchecked(bytes) })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (every character is one byte).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}
