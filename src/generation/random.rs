//! Secure random text generation.
//!
//! # Sampling Model
//!
//! Each output character consumes eight bytes from the secure source,
//! read as a little-endian `u64` and reduced modulo the number of distinct
//! characters. All bytes for one call are drawn in a single request.
//!
//! Plain modulo reduction is used instead of rejection sampling. For a set
//! of N characters the per-character bias is at most N / 2^64, which is
//! negligible for any realistic set.

use super::charset::CharacterSet;
use super::entropy::{EntropySource, OsEntropy};
use thiserror::Error;

/// Secure bytes consumed per output character.
pub const BYTES_PER_CHARACTER: usize = 8;

/// Longest text whose byte buffer stays within addressable size.
pub const MAX_LENGTH: usize = isize::MAX as usize / BYTES_PER_CHARACTER;

/// Errors that can occur during random text generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("length must be between 1 and {max}")]
    LengthOutOfRange { max: usize },
    #[error("character set must contain at least one character")]
    InvalidCharacterSet,
    #[error("secure random source failed: {0}")]
    EntropyUnavailable(#[from] rand_core::Error),
}

/// Checks `length` against `1..=MAX_LENGTH`.
fn validate_length<L: TryInto<usize>>(length: L) -> Result<usize, GenerationError> {
    match length.try_into() {
        Ok(length) if (1..=MAX_LENGTH).contains(&length) => Ok(length),
        _ => Err(GenerationError::LengthOutOfRange { max: MAX_LENGTH }),
    }
}

/// Generates random text from an injected secure source.
///
/// Holds no state besides the source handle, so a generator over
/// [`OsEntropy`] can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RandomTextGenerator<E = OsEntropy> {
    source: E,
}

impl RandomTextGenerator<OsEntropy> {
    /// Creates a generator backed by the operating system CSPRNG.
    pub fn from_os_entropy() -> Self {
        Self::new(OsEntropy)
    }
}

impl<E: EntropySource> RandomTextGenerator<E> {
    /// Creates a generator over the given source.
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Generates `length` characters drawn from the distinct characters of
    /// `character_set`.
    ///
    /// `length` may be any integer type; negative values are out of range.
    ///
    /// # Errors
    ///
    /// Checked in order: [`GenerationError::LengthOutOfRange`] unless
    /// `1 <= length <= MAX_LENGTH`, then
    /// [`GenerationError::InvalidCharacterSet`] for an empty set, then
    /// [`GenerationError::EntropyUnavailable`] if the source fails.
    pub fn generate<L>(&self, character_set: &str, length: L) -> Result<String, GenerationError>
    where
        L: TryInto<usize>,
    {
        let length = validate_length(length)?;
        let set = CharacterSet::new(character_set)?;
        self.sample(&set, length)
    }

    /// Generates `length` characters from an already built set.
    ///
    /// # Errors
    ///
    /// [`GenerationError::LengthOutOfRange`] or
    /// [`GenerationError::EntropyUnavailable`].
    pub fn generate_from(&self, set: &CharacterSet, length: usize) -> Result<String, GenerationError> {
        let length = validate_length(length)?;
        self.sample(set, length)
    }

    fn sample(&self, set: &CharacterSet, length: usize) -> Result<String, GenerationError> {
        // A single character needs no randomness.
        if let [only] = set.as_slice() {
            return Ok(std::iter::repeat(*only).take(length).collect());
        }

        let mut buffer = vec![0u8; length * BYTES_PER_CHARACTER];
        self.source.fill_secure(&mut buffer)?;

        let text: String = buffer
            .chunks_exact(BYTES_PER_CHARACTER)
            .map(|chunk| {
                let mut word = [0u8; BYTES_PER_CHARACTER];
                word.copy_from_slice(chunk);
                set.select(u64::from_le_bytes(word))
            })
            .collect();

        tracing::trace!(length, set_size = set.len(), "Generated random text");

        Ok(text)
    }
}

/// Generates random text using the operating system CSPRNG.
///
/// # Errors
///
/// See [`RandomTextGenerator::generate`].
pub fn generate_random_string<L>(character_set: &str, length: L) -> Result<String, GenerationError>
where
    L: TryInto<usize>,
{
    RandomTextGenerator::from_os_entropy().generate(character_set, length)
}
