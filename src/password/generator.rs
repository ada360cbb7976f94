//! Random password generation from a character-class policy.
//!
//! Characters are drawn independently and uniformly from the union of
//! the enabled classes, using the operating system's CSPRNG.

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

use crate::errors::{Result, VaultError};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

/// The symbol class used for generation: exactly `#`, `!`, `@`, `_`, `-`.
pub const SYMBOLS: &str = "#!@_-";

/// Longest password `generate` will produce.
pub const MAX_LENGTH: usize = 4096;

/// Which character classes contribute to the sampling alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

impl Default for PasswordPolicy {
    /// Every class enabled.
    fn default() -> Self {
        Self {
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl PasswordPolicy {
    /// The union alphabet, in class order (upper, lower, digits, symbols).
    pub fn alphabet(&self) -> String {
        let mut alphabet = String::new();
        if self.use_upper {
            alphabet.push_str(UPPERCASE);
        }
        if self.use_lower {
            alphabet.push_str(LOWERCASE);
        }
        if self.use_digits {
            alphabet.push_str(DIGITS);
        }
        if self.use_symbols {
            alphabet.push_str(SYMBOLS);
        }
        alphabet
    }
}

/// Generate a password of exactly `length` characters.
///
/// Fails with `EmptyAlphabet` when no class is enabled and with
/// `InvalidLength` when `length` is zero or above `MAX_LENGTH`.
pub fn generate(policy: &PasswordPolicy, length: usize) -> Result<String> {
    let alphabet: Vec<char> = policy.alphabet().chars().collect();
    if alphabet.is_empty() {
        return Err(VaultError::EmptyAlphabet);
    }
    if length == 0 || length > MAX_LENGTH {
        return Err(VaultError::InvalidLength(length.to_string()));
    }

    let mut rng = OsRng.unwrap_err();
    Ok((0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect())
}

/// Parse user-supplied text into a password length.
///
/// Surrounding whitespace is ignored; anything that is not an integer
/// in `1..=MAX_LENGTH` is an `InvalidLength`.
pub fn parse_length(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_LENGTH).contains(&n) => Ok(n),
        _ => Err(VaultError::InvalidLength(text.to_string())),
    }
}
