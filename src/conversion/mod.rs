//! Typed conversion of text.
//!
//! Converts optional input text into a target type, optionally under a
//! caller-supplied [`FormatProvider`], optionally falling back to a default.
//! The target is named statically through [`Convertible`] or at run time
//! through [`TypeKind`].

mod convert;
mod dynamic;
mod number;
mod provider;
mod target;

pub use convert::{
    convert, convert_or_default, convert_or_default_with, convert_with, ConversionError,
};
pub use dynamic::{convert_dynamic, convert_dynamic_or_default, Value};
pub use provider::{Culture, FormatProvider, BUILTIN_CULTURES};
pub use target::{Convertible, FromText, TypeKind, UnknownTypeKind};
