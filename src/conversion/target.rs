//! Conversion targets.
//!
//! [`FromText`] is implemented once per effective type and holds the
//! parsing grammar. [`Convertible`] is what callers name as the target: the
//! effective types themselves, or `Option<T>` which resolves to `T`.

use super::convert::ConversionError;
use super::number;
use super::provider::FormatProvider;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// Effective target types supported by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    String,
    Date,
    DateTime,
}

impl TypeKind {
    /// All kinds, in declaration order.
    pub const ALL: [TypeKind; 15] = [
        TypeKind::I8,
        TypeKind::I16,
        TypeKind::I32,
        TypeKind::I64,
        TypeKind::U8,
        TypeKind::U16,
        TypeKind::U32,
        TypeKind::U64,
        TypeKind::F32,
        TypeKind::F64,
        TypeKind::Bool,
        TypeKind::Char,
        TypeKind::String,
        TypeKind::Date,
        TypeKind::DateTime,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            TypeKind::I8 => "i8",
            TypeKind::I16 => "i16",
            TypeKind::I32 => "i32",
            TypeKind::I64 => "i64",
            TypeKind::U8 => "u8",
            TypeKind::U16 => "u16",
            TypeKind::U32 => "u32",
            TypeKind::U64 => "u64",
            TypeKind::F32 => "f32",
            TypeKind::F64 => "f64",
            TypeKind::Bool => "bool",
            TypeKind::Char => "char",
            TypeKind::String => "string",
            TypeKind::Date => "date",
            TypeKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target type '{0}'")]
pub struct UnknownTypeKind(pub String);

impl FromStr for TypeKind {
    type Err = UnknownTypeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "i8" | "int8" | "sbyte" => TypeKind::I8,
            "i16" | "int16" | "short" => TypeKind::I16,
            "i32" | "int32" | "int" => TypeKind::I32,
            "i64" | "int64" | "long" => TypeKind::I64,
            "u8" | "uint8" | "byte" => TypeKind::U8,
            "u16" | "uint16" | "ushort" => TypeKind::U16,
            "u32" | "uint32" | "uint" => TypeKind::U32,
            "u64" | "uint64" | "ulong" => TypeKind::U64,
            "f32" | "float" | "single" => TypeKind::F32,
            "f64" | "double" => TypeKind::F64,
            "bool" | "boolean" => TypeKind::Bool,
            "char" => TypeKind::Char,
            "string" | "str" => TypeKind::String,
            "date" => TypeKind::Date,
            "datetime" | "date-time" => TypeKind::DateTime,
            _ => return Err(UnknownTypeKind(s.to_owned())),
        };
        Ok(kind)
    }
}

/// An effective type that can be parsed from text.
pub trait FromText: Sized {
    /// Descriptor used in errors and runtime dispatch.
    const KIND: TypeKind;

    /// Whether absent input is a legal value of this type.
    const NULLABLE: bool = false;

    /// Parses `text` under the conventions of `provider`.
    fn from_text<P>(text: &str, provider: &P) -> Result<Self, ConversionError>
    where
        P: FormatProvider + ?Sized;
}

/// A type callers may name as a conversion target.
///
/// Every [`FromText`] type is its own effective type. `Option<T>` converts
/// into `T` and wraps the result; only one level of wrapping is resolved.
pub trait Convertible: Sized {
    /// The type actually parsed.
    type Effective: FromText;

    /// Wraps a parsed effective value.
    fn from_effective(value: Self::Effective) -> Self;

    /// The value for absent input, if this target can represent it.
    fn absent() -> Option<Self>;

    /// True for the absent representation.
    fn is_absent(&self) -> bool;
}

impl<T: FromText> Convertible for Option<T> {
    type Effective = T;

    fn from_effective(value: T) -> Self {
        Some(value)
    }

    fn absent() -> Option<Self> {
        T::NULLABLE.then_some(None)
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! plain_convertible {
    ($($t:ty),* $(,)?) => {
        $(
            impl Convertible for $t {
                type Effective = $t;

                fn from_effective(value: $t) -> Self {
                    value
                }

                fn absent() -> Option<Self> {
                    None
                }

                fn is_absent(&self) -> bool {
                    false
                }
            }
        )*
    };
}

macro_rules! integer_from_text {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl FromText for $t {
                const KIND: TypeKind = TypeKind::$kind;

                fn from_text<P>(text: &str, provider: &P) -> Result<Self, ConversionError>
                where
                    P: FormatProvider + ?Sized,
                {
                    number::parse_integer(text, provider)
                        .map_err(|e| ConversionError::from_number(e, text, Self::KIND))
                }
            }
        )*
    };
}

macro_rules! float_from_text {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl FromText for $t {
                const KIND: TypeKind = TypeKind::$kind;

                fn from_text<P>(text: &str, provider: &P) -> Result<Self, ConversionError>
                where
                    P: FormatProvider + ?Sized,
                {
                    number::parse_float(text, provider)
                        .map_err(|e| ConversionError::from_number(e, text, Self::KIND))
                }
            }
        )*
    };
}

integer_from_text!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

float_from_text!(f32 => F32, f64 => F64);

plain_convertible!(
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    bool,
    char,
    String,
    NaiveDate,
    NaiveDateTime,
);

impl FromText for bool {
    const KIND: TypeKind = TypeKind::Bool;

    fn from_text<P>(text: &str, _provider: &P) -> Result<Self, ConversionError>
    where
        P: FormatProvider + ?Sized,
    {
        let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConversionError::format(text, Self::KIND))
        }
    }
}

impl FromText for char {
    const KIND: TypeKind = TypeKind::Char;

    fn from_text<P>(text: &str, _provider: &P) -> Result<Self, ConversionError>
    where
        P: FormatProvider + ?Sized,
    {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConversionError::format(text, Self::KIND)),
        }
    }
}

impl FromText for String {
    const KIND: TypeKind = TypeKind::String;
    const NULLABLE: bool = true;

    fn from_text<P>(text: &str, _provider: &P) -> Result<Self, ConversionError>
    where
        P: FormatProvider + ?Sized,
    {
        Ok(text.to_owned())
    }
}

const ISO_DATE_PATTERNS: &[&str] = &["%Y-%m-%d"];

const ISO_DATE_TIME_PATTERNS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl FromText for NaiveDate {
    const KIND: TypeKind = TypeKind::Date;

    fn from_text<P>(text: &str, provider: &P) -> Result<Self, ConversionError>
    where
        P: FormatProvider + ?Sized,
    {
        let trimmed = text.trim();
        provider
            .date_patterns()
            .iter()
            .map(String::as_str)
            .chain(ISO_DATE_PATTERNS.iter().copied())
            .find_map(|pattern| NaiveDate::parse_from_str(trimmed, pattern).ok())
            .ok_or_else(|| ConversionError::format(text, Self::KIND))
    }
}

impl FromText for NaiveDateTime {
    const KIND: TypeKind = TypeKind::DateTime;

    fn from_text<P>(text: &str, provider: &P) -> Result<Self, ConversionError>
    where
        P: FormatProvider + ?Sized,
    {
        let trimmed = text.trim();
        provider
            .date_time_patterns()
            .iter()
            .map(String::as_str)
            .chain(ISO_DATE_TIME_PATTERNS.iter().copied())
            .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
            .or_else(|| {
                NaiveDate::from_text(trimmed, provider)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| ConversionError::format(text, Self::KIND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::provider::Culture;

    #[test]
    fn test_type_kind_names_round_trip() {
        for kind in TypeKind::ALL {
            assert_eq!(kind.name().parse::<TypeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_type_kind_aliases() {
        assert_eq!("int".parse::<TypeKind>(), Ok(TypeKind::I32));
        assert_eq!("Double".parse::<TypeKind>(), Ok(TypeKind::F64));
        assert_eq!("ulong".parse::<TypeKind>(), Ok(TypeKind::U64));
        assert!("decimal".parse::<TypeKind>().is_err());
    }

    #[test]
    fn test_bool_is_case_insensitive_and_trimmed() {
        let invariant = Culture::invariant();
        assert_eq!(bool::from_text(" TRUE ", &invariant), Ok(true));
        assert_eq!(bool::from_text("False\0", &invariant), Ok(false));
        assert!(bool::from_text("yes", &invariant).is_err());
    }

    #[test]
    fn test_char_requires_single_scalar() {
        let invariant = Culture::invariant();
        assert_eq!(char::from_text("x", &invariant), Ok('x'));
        assert_eq!(char::from_text("ü", &invariant), Ok('ü'));
        assert!(char::from_text("xy", &invariant).is_err());
        assert!(char::from_text("", &invariant).is_err());
        assert!(char::from_text(" x", &invariant).is_err());
    }

    #[test]
    fn test_date_uses_provider_pattern() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let de = Culture::from_name("de-DE").unwrap();
        let us = Culture::from_name("en-US").unwrap();

        assert_eq!(NaiveDate::from_text("01.03.2024", &de), Ok(expected));
        assert_eq!(NaiveDate::from_text("03/01/2024", &us), Ok(expected));
        assert_eq!(NaiveDate::from_text("2024-03-01", &de), Ok(expected));
        assert!(NaiveDate::from_text("2024-13-01", &de).is_err());
    }

    #[test]
    fn test_date_time_falls_back_to_midnight() {
        let invariant = Culture::invariant();
        let midnight = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(NaiveDateTime::from_text("03/01/2024", &invariant), Ok(midnight));
    }

    #[test]
    fn test_date_time_iso() {
        let invariant = Culture::invariant();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(13, 45, 10)
            .unwrap();

        assert_eq!(
            NaiveDateTime::from_text("2024-03-01T13:45:10", &invariant),
            Ok(expected)
        );
        assert_eq!(
            NaiveDateTime::from_text("03/01/2024 13:45:10", &invariant),
            Ok(expected)
        );
    }

    #[test]
    fn test_option_absent_depends_on_effective_type() {
        assert_eq!(<Option<String> as Convertible>::absent(), Some(None));
        assert_eq!(<Option<i32> as Convertible>::absent(), None);
        assert_eq!(<String as Convertible>::absent(), None);
    }
}
