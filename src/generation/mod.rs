//! Cryptographically secure random text.
//!
//! Draws characters uniformly (up to a negligible modulo bias) from the
//! distinct members of a caller-supplied character set, using an injected
//! [`EntropySource`].

pub mod charset;
mod entropy;
mod random;

pub use charset::CharacterSet;
pub use entropy::{EntropySource, OsEntropy};
pub use random::{
    generate_random_string, GenerationError, RandomTextGenerator, BYTES_PER_CHARACTER, MAX_LENGTH,
};
