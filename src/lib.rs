//! Password generation with guaranteed character-class coverage.
//!
//! ```
//! use passqr::pass::{self, CharacterClass, Mode};
//!
//! let password = pass::generate(12, Mode::parse("strong")).unwrap();
//! assert_eq!(password.len(), 12);
//! for class in CharacterClass::ALL {
//!     assert!(password.chars().any(|c| class.contains(c)));
//! }
//! ```

pub mod pass;
pub mod rand;
