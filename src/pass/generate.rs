//! Password generation.

use zeroize::Zeroize;

use super::charset::{self, CharacterClass};
use super::{MAX_LENGTH, Mode, PassError, Password};
use crate::rand::{self, EntropySource, SystemEntropy};

/// Generate a password from the system CSPRNG.
pub fn generate(length: usize, mode: Mode) -> Result<Password, PassError> {
    generate_with(&mut SystemEntropy, length, mode)
}

/// Generate a password drawing from `source`.
///
/// One character from each class of `mode` is drawn first (Letters, Digits,
/// Symbols order), the rest come uniformly from the whole pool, and the
/// result is shuffled. When `length` is shorter than the number of classes,
/// only the first `length` classes get a guaranteed character.
pub fn generate_with<E: EntropySource + ?Sized>(
    source: &mut E,
    length: usize,
    mode: Mode,
) -> Result<Password, PassError> {
    if length == 0 {
        return Err(PassError::InvalidLength(0));
    }
    let too_long = PassError::TooLong {
        length,
        max: MAX_LENGTH,
    };
    if length > MAX_LENGTH {
        return Err(too_long);
    }

    let classes = mode.classes();
    let pool = charset::build(classes);
    if pool.is_empty() {
        log::error!("mode {mode} produced an empty character pool");
        return Err(PassError::EmptyCharacterPool);
    }

    let mut buf = Vec::new();
    if buf.try_reserve_exact(length).is_err() {
        log::error!("could not allocate {length} bytes for a password");
        return Err(too_long);
    }
    let result = fill(source, classes, &pool, length, &mut buf)
        .and_then(|()| shuffle(source, &mut buf));
    if let Err(e) = result {
        buf.zeroize();
        return Err(e.into());
    }

    log::debug!("generated {length} chars in {mode} mode from a {} char pool", pool.len());
    Ok(Password::from_ascii(buf))
}

/// Required characters first, then filler from the pool, up to `length`.
fn fill<E: EntropySource + ?Sized>(
    source: &mut E,
    classes: &[CharacterClass],
    pool: &[u8],
    length: usize,
    buf: &mut Vec<u8>,
) -> Result<(), rand::EntropyError> {
    for class in classes.iter().take(length) {
        buf.push(rand::choose(source, class.alphabet())?);
    }
    while buf.len() < length {
        buf.push(rand::choose(source, pool)?);
    }
    Ok(())
}

/// Fisher-Yates, last index down to 1.
#[inline]
fn shuffle<E: EntropySource + ?Sized>(
    source: &mut E,
    chars: &mut [u8],
) -> Result<(), rand::EntropyError> {
    for i in (1..chars.len()).rev() {
        let j = rand::index(source, i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}
