//! Byte-level transformations of text.
//!
//! Text is encoded to bytes with a chosen [`TextEncoding`] and can then be
//! digested with any supported [`HashAlgorithm`].

mod encoding;
mod hash;

pub use encoding::{to_byte_array, TextEncoding};
pub use hash::{compute_hash, compute_hash_hex, HashAlgorithm, UnknownHashAlgorithm};
