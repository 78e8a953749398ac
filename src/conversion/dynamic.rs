//! Runtime dispatch over [`TypeKind`].
//!
//! Used where the target is only known at run time, such as a type name
//! given on the command line.

use super::convert::{convert_with, ConversionError};
use super::provider::FormatProvider;
use super::target::TypeKind;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A converted value of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// The kind of the carried value.
    pub fn kind(&self) -> TypeKind {
        match self {
            Value::I8(_) => TypeKind::I8,
            Value::I16(_) => TypeKind::I16,
            Value::I32(_) => TypeKind::I32,
            Value::I64(_) => TypeKind::I64,
            Value::U8(_) => TypeKind::U8,
            Value::U16(_) => TypeKind::U16,
            Value::U32(_) => TypeKind::U32,
            Value::U64(_) => TypeKind::U64,
            Value::F32(_) => TypeKind::F32,
            Value::F64(_) => TypeKind::F64,
            Value::Bool(_) => TypeKind::Bool,
            Value::Char(_) => TypeKind::Char,
            Value::String(_) => TypeKind::String,
            Value::Date(_) => TypeKind::Date,
            Value::DateTime(_) => TypeKind::DateTime,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Value::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

/// Converts `text` into the effective type named by `kind`.
///
/// # Errors
///
/// Same as [`convert_with`](super::convert_with). Absent input is always
/// [`ConversionError::NullInput`], since a [`Value`] cannot be absent.
pub fn convert_dynamic<P>(
    text: Option<&str>,
    kind: TypeKind,
    provider: &P,
) -> Result<Value, ConversionError>
where
    P: FormatProvider + ?Sized,
{
    let value = match kind {
        TypeKind::I8 => Value::I8(convert_with(text, provider)?),
        TypeKind::I16 => Value::I16(convert_with(text, provider)?),
        TypeKind::I32 => Value::I32(convert_with(text, provider)?),
        TypeKind::I64 => Value::I64(convert_with(text, provider)?),
        TypeKind::U8 => Value::U8(convert_with(text, provider)?),
        TypeKind::U16 => Value::U16(convert_with(text, provider)?),
        TypeKind::U32 => Value::U32(convert_with(text, provider)?),
        TypeKind::U64 => Value::U64(convert_with(text, provider)?),
        TypeKind::F32 => Value::F32(convert_with(text, provider)?),
        TypeKind::F64 => Value::F64(convert_with(text, provider)?),
        TypeKind::Bool => Value::Bool(convert_with(text, provider)?),
        TypeKind::Char => Value::Char(convert_with(text, provider)?),
        TypeKind::String => Value::String(convert_with(text, provider)?),
        TypeKind::Date => Value::Date(convert_with(text, provider)?),
        TypeKind::DateTime => Value::DateTime(convert_with(text, provider)?),
    };
    Ok(value)
}

/// Converts `text` into the kind of `default`, or returns `default`.
pub fn convert_dynamic_or_default<P>(text: Option<&str>, provider: &P, default: Value) -> Value
where
    P: FormatProvider + ?Sized,
{
    match convert_dynamic(text, default.kind(), provider) {
        Ok(value) => value,
        Err(error) => {
            tracing::trace!(%error, "Dynamic conversion failed, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::provider::Culture;

    #[test]
    fn test_dispatch_matches_kind() {
        let invariant = Culture::invariant();
        for (text, kind) in [
            ("-5", TypeKind::I8),
            ("300", TypeKind::U16),
            ("2.5", TypeKind::F64),
            ("true", TypeKind::Bool),
            ("q", TypeKind::Char),
            ("2024-03-01", TypeKind::Date),
        ] {
            let value = convert_dynamic(Some(text), kind, &invariant).unwrap();
            assert_eq!(value.kind(), kind);
        }
    }

    #[test]
    fn test_display_is_canonical() {
        let de = Culture::from_name("de-DE").unwrap();
        let value = convert_dynamic(Some("1.234,5"), TypeKind::F64, &de).unwrap();
        assert_eq!(value.to_string(), "1234.5");

        let date = convert_dynamic(Some("01.03.2024"), TypeKind::Date, &de).unwrap();
        assert_eq!(date.to_string(), "2024-03-01");
    }

    #[test]
    fn test_absent_input_is_null_error() {
        let invariant = Culture::invariant();
        assert_eq!(
            convert_dynamic(None, TypeKind::String, &invariant),
            Err(ConversionError::NullInput {
                target: TypeKind::String
            })
        );
    }

    #[test]
    fn test_default_used_on_failure() {
        let invariant = Culture::invariant();
        let value = convert_dynamic_or_default(Some("nope"), &invariant, Value::I32(-1));
        assert_eq!(value, Value::I32(-1));

        let value = convert_dynamic_or_default(Some("7"), &invariant, Value::I32(-1));
        assert_eq!(value, Value::I32(7));
    }
}
