//! Deduplicated character sets.

use super::random::GenerationError;
use std::collections::HashSet;

/// Upper- and lowercase ASCII letters followed by digits.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// Lowercase hexadecimal digits.
pub const HEX_LOWER: &str = "0123456789abcdef";
/// Printable ASCII punctuation.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Looks up a preset by name.
pub fn preset(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "alphanumeric" => Some(ALPHANUMERIC),
        "lowercase" => Some(LOWERCASE),
        "uppercase" => Some(UPPERCASE),
        "digits" => Some(DIGITS),
        "hex" => Some(HEX_LOWER),
        "symbols" => Some(SYMBOLS),
        _ => None,
    }
}

/// An ordered set of distinct characters, never empty.
///
/// Duplicates in the source text collapse to their first occurrence, so
/// sampling is uniform over distinct characters rather than weighted by
/// repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Builds a set from `text`, keeping first occurrences in order.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidCharacterSet`] if `text` is empty.
    pub fn new(text: &str) -> Result<Self, GenerationError> {
        let mut seen = HashSet::new();
        let chars: Vec<char> = text.chars().filter(|c| seen.insert(*c)).collect();

        if chars.is_empty() {
            return Err(GenerationError::InvalidCharacterSet);
        }

        Ok(Self { chars })
    }

    /// Number of distinct characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the distinct characters in order.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Returns true if `c` is a member of the set.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Picks the character for a 64-bit random word.
    ///
    /// Uses `word % len`. When `len` does not divide 2^64 the lowest
    /// `2^64 mod len` indices are favoured by at most `len / 2^64` each.
    #[inline]
    pub(crate) fn select(&self, word: u64) -> char {
        self.chars[(word % self.chars.len() as u64) as usize]
    }
}
