//! Random password generator.
//!
//! Builds a character set from the selected classes (lowercase,
//! uppercase, digits, symbols, in that order) and draws each character
//! uniformly from it.
//!
//! The generator carries its own strength meter, which is more
//! length-hungry than `vault::classify` and is only used to label
//! freshly generated passwords.

use rand::Rng;

use crate::errors::{PassVaultError, Result};
use crate::vault::Strength;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Which character classes to draw from, and how many characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl GeneratorOptions {
    /// The combined character set for the selected classes.
    pub fn charset(&self) -> Vec<char> {
        let mut set = String::new();
        if self.lowercase {
            set.push_str(LOWERCASE);
        }
        if self.uppercase {
            set.push_str(UPPERCASE);
        }
        if self.numbers {
            set.push_str(DIGITS);
        }
        if self.symbols {
            set.push_str(SYMBOLS);
        }
        set.chars().collect()
    }
}

/// Generate one password.
pub fn generate(options: &GeneratorOptions) -> Result<String> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(PassVaultError::InvalidLength(
            options.length,
            MIN_LENGTH,
            MAX_LENGTH,
        ));
    }

    let charset = options.charset();
    if charset.is_empty() {
        return Err(PassVaultError::EmptyCharset);
    }

    let mut rng = rand::rng();
    Ok((0..options.length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect())
}

/// Generator meter: `min(5, len / 4)` for length, +1 lowercase,
/// +1 uppercase, +1 digit, +2 symbol; under 6 weak, under 9 medium.
pub fn estimate_strength(password: &str) -> Strength {
    let len = password.chars().count();
    let mut score = (len / 4).min(5);

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 2;
    }

    match score {
        s if s < 6 => Strength::Weak,
        s if s < 9 => Strength::Medium,
        _ => Strength::Strong,
    }
}
