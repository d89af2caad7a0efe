//! Character classes and pool building for password generation.

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named, ordered alphabet. Variant order is the fixed class order used for
/// pool building and required-character draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    /// ASCII letters, lowercase then uppercase.
    Letters,
    Digits,
    /// ASCII punctuation.
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [Self::Letters, Self::Digits, Self::Symbols];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Letters => LETTERS,
            Self::Digits => DIGITS,
            Self::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// The class `c` belongs to, if any.
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

/// Concatenate the alphabets of `classes`, in the order given.
pub fn build(classes: &[CharacterClass]) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Pool size for `classes` (for entropy calculation).
pub fn size(classes: &[CharacterClass]) -> usize {
    classes.iter().map(|c| c.alphabet().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharacterClass::Letters.alphabet().len(), 52);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 32);
    }

    #[test]
    fn symbols_are_ascii_punctuation() {
        let expected: Vec<u8> = (0x21u8..0x7f).filter(u8::is_ascii_punctuation).collect();
        assert_eq!(CharacterClass::Symbols.alphabet(), expected.as_slice());
    }

    #[test]
    fn classes_are_disjoint() {
        for c in (0x21u8..0x7f).map(char::from) {
            let hits = CharacterClass::ALL.iter().filter(|k| k.contains(c)).count();
            assert_eq!(hits, 1, "{c:?} should belong to exactly one class");
        }
        assert_eq!(CharacterClass::of(' '), None);
        assert_eq!(CharacterClass::of('é'), None);
    }

    #[test]
    fn pool_follows_class_order() {
        let pool = build(&CharacterClass::ALL);
        assert_eq!(pool.len(), 94);
        assert_eq!(size(&CharacterClass::ALL), 94);
        assert_eq!(&pool[..52], LETTERS);
        assert_eq!(&pool[52..62], DIGITS);
        assert_eq!(&pool[62..], SYMBOLS);
    }
}
