//! Conversion entry points.

use super::number::NumberError;
use super::provider::{Culture, FormatProvider};
use super::target::{Convertible, FromText, TypeKind};
use thiserror::Error;

/// Errors raised by the non-defaulting conversion functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("absent input cannot be converted to {target}")]
    NullInput { target: TypeKind },
    #[error("'{input}' is not a valid {target}")]
    Format { input: String, target: TypeKind },
    #[error("'{input}' is outside the range of {target}")]
    Range { input: String, target: TypeKind },
}

impl ConversionError {
    pub(crate) fn format(input: &str, target: TypeKind) -> Self {
        ConversionError::Format {
            input: input.to_owned(),
            target,
        }
    }

    pub(crate) fn from_number(error: NumberError, input: &str, target: TypeKind) -> Self {
        match error {
            NumberError::Invalid => Self::format(input, target),
            NumberError::Overflow => ConversionError::Range {
                input: input.to_owned(),
                target,
            },
        }
    }

    /// The effective type the conversion was aimed at.
    pub fn target(&self) -> TypeKind {
        match self {
            ConversionError::NullInput { target }
            | ConversionError::Format { target, .. }
            | ConversionError::Range { target, .. } => *target,
        }
    }
}

/// Converts `text` into `T` using the invariant culture.
///
/// # Errors
///
/// [`ConversionError::NullInput`] when `text` is absent and the effective
/// type cannot represent absence, [`ConversionError::Format`] when the text
/// does not match the type's grammar, and [`ConversionError::Range`] when
/// the value does not fit.
pub fn convert<T: Convertible>(text: Option<&str>) -> Result<T, ConversionError> {
    convert_with(text, Culture::invariant_ref())
}

/// Converts `text` into `T` under the conventions of `provider`.
///
/// # Errors
///
/// Same as [`convert`].
pub fn convert_with<T, P>(text: Option<&str>, provider: &P) -> Result<T, ConversionError>
where
    T: Convertible,
    P: FormatProvider + ?Sized,
{
    let Some(text) = text else {
        return T::absent().ok_or(ConversionError::NullInput {
            target: <T::Effective as FromText>::KIND,
        });
    };

    <T::Effective as FromText>::from_text(text, provider).map(T::from_effective)
}

/// Converts `text` into `T` using the invariant culture, or returns `default`.
///
/// Every failure is swallowed, and a successful conversion to the absent
/// representation (`None`) also yields `default`.
pub fn convert_or_default<T: Convertible>(text: Option<&str>, default: T) -> T {
    convert_or_default_with(text, Culture::invariant_ref(), default)
}

/// Converts `text` into `T` under `provider`, or returns `default`.
pub fn convert_or_default_with<T, P>(text: Option<&str>, provider: &P, default: T) -> T
where
    T: Convertible,
    P: FormatProvider + ?Sized,
{
    match convert_with::<T, P>(text, provider) {
        Ok(value) if !value.is_absent() => value,
        Ok(_) => default,
        Err(error) => {
            tracing::trace!(%error, "Conversion failed, using default");
            default
        }
    }
}
