use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::charset::CharacterClass;

/// Which character classes a request activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Strong,
    /// Alias of `Strong`.
    Mixed,
    Letters,
    Digits,
}

impl Mode {
    pub const NAMES: [&'static str; 4] = ["strong", "letters", "digits", "mixed"];

    /// Case-insensitive lookup. Never fails: anything unrecognized is `Strong`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "strong" => Self::Strong,
            "mixed" => Self::Mixed,
            "letters" => Self::Letters,
            "digits" => Self::Digits,
            other => {
                log::debug!("unrecognized mode {other:?}, using strong");
                Self::Strong
            }
        }
    }

    /// Active classes, in the fixed Letters, Digits, Symbols order.
    pub fn classes(self) -> &'static [CharacterClass] {
        match self {
            Self::Strong | Self::Mixed => &CharacterClass::ALL,
            Self::Letters => &[CharacterClass::Letters],
            Self::Digits => &[CharacterClass::Digits],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Mixed => "mixed",
            Self::Letters => "letters",
            Self::Digits => "digits",
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Mode::parse("STRONG"), Mode::Strong);
        assert_eq!(Mode::parse("Mixed"), Mode::Mixed);
        assert_eq!(Mode::parse("lEtTeRs"), Mode::Letters);
        assert_eq!(Mode::parse("digits"), Mode::Digits);
    }

    #[test]
    fn unknown_falls_back_to_strong() {
        for s in ["banana", "", "letter", " strong", "digits!"] {
            assert_eq!(Mode::parse(s), Mode::Strong, "{s:?}");
        }
        assert_eq!("banana".parse::<Mode>(), Ok(Mode::Strong));
    }

    #[test]
    fn mixed_activates_same_classes_as_strong() {
        assert_eq!(Mode::Mixed.classes(), Mode::Strong.classes());
        assert_eq!(Mode::Letters.classes(), &[CharacterClass::Letters]);
        assert_eq!(Mode::Digits.classes(), &[CharacterClass::Digits]);
    }

    #[test]
    fn every_mode_activates_a_class() {
        for name in Mode::NAMES {
            assert!(!Mode::parse(name).classes().is_empty());
            assert_eq!(Mode::parse(name).to_string(), name);
        }
    }
}
