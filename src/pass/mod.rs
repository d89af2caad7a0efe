//! Password generation.

pub mod charset;
mod error;
mod generate;
mod mode;
mod password;

pub use charset::CharacterClass;
pub use error::{MAX_LENGTH, PassError, parse_length};
pub use generate::{generate, generate_with};
pub use mode::Mode;
pub use password::Password;
