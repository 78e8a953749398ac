//! Textkit Library
//!
//! Small, dependable text utilities: locale-aware typed conversion,
//! cryptographically secure random text, byte encoding and hashing.
//!
//! # Architecture
//!
//! ```text
//! conversion      text → typed value (culture-aware)
//! generation      entropy source → random text
//! transformation  text → bytes → digest
//! ```
//!
//! All operations are stateless and safe to call from many threads.
//!
//! # Example
//!
//! ```
//! use textkit::{
//!     conversion::{convert, convert_or_default, convert_with, Culture},
//!     generation::generate_random_string,
//!     transformation::{compute_hash_hex, HashAlgorithm},
//! };
//!
//! let n: i32 = convert(Some("42")).unwrap();
//! assert_eq!(n, 42);
//!
//! let german = Culture::from_name("de-DE").unwrap();
//! let price: f64 = convert_with(Some("1.234,5"), &german).unwrap();
//! assert_eq!(price, 1234.5);
//!
//! assert_eq!(convert_or_default(Some("oops"), 7u8), 7);
//!
//! let token = generate_random_string("abcdef0123456789", 32).unwrap();
//! assert_eq!(token.len(), 32);
//!
//! let digest = compute_hash_hex("hello world", HashAlgorithm::Sha1, None);
//! assert_eq!(digest, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod conversion;
pub mod generation;
pub mod transformation;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig};
pub use conversion::{
    convert, convert_dynamic, convert_or_default, convert_or_default_with, convert_with,
    ConversionError, Culture, FormatProvider, TypeKind, Value,
};
pub use generation::{
    generate_random_string, CharacterSet, EntropySource, GenerationError, OsEntropy,
    RandomTextGenerator,
};
pub use transformation::{compute_hash, compute_hash_hex, to_byte_array, HashAlgorithm, TextEncoding};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
