//! Locale-aware numeric grammar.
//!
//! Text is scanned under the provider's separators and signs into a
//! canonical ASCII literal, which the standard parsers then turn into a
//! value. The standard parsers never see locale-specific characters.

use super::provider::FormatProvider;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberError {
    /// Text does not follow the grammar.
    Invalid,
    /// Text is well formed but the value does not fit.
    Overflow,
}

/// Scanned pieces of a numeric literal, digits only.
#[derive(Debug, Default)]
struct Literal {
    negative: bool,
    integral: String,
    fraction: String,
    exponent: Option<(bool, String)>,
}

/// Whitespace accepted around numbers: tab through carriage return, and space.
fn is_number_whitespace(c: char) -> bool {
    matches!(c, '\u{9}'..='\u{d}' | ' ')
}

fn strip_symbol<'a>(text: &'a str, symbol: &str) -> Option<&'a str> {
    if symbol.is_empty() {
        return None;
    }
    text.strip_prefix(symbol)
}

/// No-break space group separators also match an ordinary space.
fn strip_group<'a>(text: &'a str, separator: &str) -> Option<&'a str> {
    strip_symbol(text, separator).or_else(|| match separator {
        "\u{a0}" | "\u{202f}" => text.strip_prefix(' '),
        _ => None,
    })
}

fn strip_sign<'a, P>(text: &'a str, provider: &P) -> (bool, &'a str)
where
    P: FormatProvider + ?Sized,
{
    if let Some(rest) = strip_symbol(text, provider.negative_sign()) {
        (true, rest)
    } else if let Some(rest) = strip_symbol(text, provider.positive_sign()) {
        (false, rest)
    } else {
        (false, text)
    }
}

fn take_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

fn scan<P>(text: &str, provider: &P, allow_float: bool) -> Result<Literal, NumberError>
where
    P: FormatProvider + ?Sized,
{
    let text = text.trim_matches(is_number_whitespace);
    let (negative, mut rest) = strip_sign(text, provider);
    let mut literal = Literal {
        negative,
        ..Literal::default()
    };
    let mut seen_decimal = false;

    loop {
        let (digits, tail) = take_digits(rest);
        if !digits.is_empty() {
            if seen_decimal {
                literal.fraction.push_str(digits);
            } else {
                literal.integral.push_str(digits);
            }
            rest = tail;
            continue;
        }

        if !allow_float {
            break;
        }

        // Decimal takes precedence when a provider uses one symbol for both.
        if !seen_decimal {
            if let Some(tail) = strip_symbol(rest, provider.decimal_separator()) {
                seen_decimal = true;
                rest = tail;
                continue;
            }
            if !literal.integral.is_empty() {
                if let Some(tail) = strip_group(rest, provider.group_separator()) {
                    rest = tail;
                    continue;
                }
            }
        }

        break;
    }

    if literal.integral.is_empty() && literal.fraction.is_empty() {
        return Err(NumberError::Invalid);
    }

    if allow_float {
        if let Some(tail) = rest.strip_prefix(['e', 'E']) {
            let (exp_negative, tail) = strip_sign(tail, provider);
            let (digits, tail) = take_digits(tail);
            if digits.is_empty() {
                return Err(NumberError::Invalid);
            }
            literal.exponent = Some((exp_negative, digits.to_owned()));
            rest = tail;
        }
    }

    if rest.is_empty() {
        Ok(literal)
    } else {
        Err(NumberError::Invalid)
    }
}

/// Parses a signed or unsigned integer with an optional leading sign.
pub(crate) fn parse_integer<T, P>(text: &str, provider: &P) -> Result<T, NumberError>
where
    T: FromStr<Err = ParseIntError> + Default,
    P: FormatProvider + ?Sized,
{
    let literal = scan(text, provider, false)?;

    if literal.negative && literal.integral.bytes().all(|b| b == b'0') {
        return Ok(T::default());
    }

    let canonical = if literal.negative {
        format!("-{}", literal.integral)
    } else {
        literal.integral
    };

    canonical.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumberError::Overflow,
        // Digits were validated, so a rejected '-' means an unsigned target.
        IntErrorKind::InvalidDigit if literal.negative => NumberError::Overflow,
        _ => NumberError::Invalid,
    })
}

/// Floating-point types the grammar can produce.
pub(crate) trait Float: FromStr + Copy {
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn is_infinite(self) -> bool;
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Float for $t {
                const NAN: Self = <$t>::NAN;
                const INFINITY: Self = <$t>::INFINITY;
                const NEG_INFINITY: Self = <$t>::NEG_INFINITY;

                fn is_infinite(self) -> bool {
                    <$t>::is_infinite(self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

fn special_value<T, P>(text: &str, provider: &P) -> Option<T>
where
    T: Float,
    P: FormatProvider + ?Sized,
{
    let text = text.trim_matches(is_number_whitespace);
    if text.is_empty() {
        return None;
    }
    let positive_infinity = provider.positive_infinity_symbol();

    if text.eq_ignore_ascii_case(provider.nan_symbol()) {
        Some(T::NAN)
    } else if text.eq_ignore_ascii_case(positive_infinity)
        || strip_symbol(text, provider.positive_sign())
            .is_some_and(|rest| rest.eq_ignore_ascii_case(positive_infinity))
    {
        Some(T::INFINITY)
    } else if text.eq_ignore_ascii_case(provider.negative_infinity_symbol()) {
        Some(T::NEG_INFINITY)
    } else {
        None
    }
}

/// Parses a floating-point number with grouping, decimal point and exponent.
pub(crate) fn parse_float<T, P>(text: &str, provider: &P) -> Result<T, NumberError>
where
    T: Float,
    P: FormatProvider + ?Sized,
{
    if let Some(value) = special_value(text, provider) {
        return Ok(value);
    }

    let literal = scan(text, provider, true)?;

    let mut canonical = String::with_capacity(literal.integral.len() + literal.fraction.len() + 8);
    if literal.negative {
        canonical.push('-');
    }
    if literal.integral.is_empty() {
        canonical.push('0');
    } else {
        canonical.push_str(&literal.integral);
    }
    if !literal.fraction.is_empty() {
        canonical.push('.');
        canonical.push_str(&literal.fraction);
    }
    if let Some((negative, digits)) = &literal.exponent {
        canonical.push('e');
        if *negative {
            canonical.push('-');
        }
        canonical.push_str(digits);
    }

    let value = canonical.parse::<T>().map_err(|_| NumberError::Invalid)?;
    if value.is_infinite() {
        return Err(NumberError::Overflow);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::provider::Culture;

    fn invariant() -> Culture {
        Culture::invariant()
    }

    fn culture(name: &str) -> Culture {
        Culture::from_name(name).unwrap()
    }

    #[test]
    fn test_integer_with_whitespace_and_sign() {
        assert_eq!(parse_integer::<i32, _>("  +42\t", &invariant()), Ok(42));
        assert_eq!(parse_integer::<i32, _>("-42", &invariant()), Ok(-42));
    }

    #[test]
    fn test_integer_rejects_separators() {
        assert_eq!(
            parse_integer::<i32, _>("1,000", &invariant()),
            Err(NumberError::Invalid)
        );
        assert_eq!(
            parse_integer::<i32, _>("1.0", &invariant()),
            Err(NumberError::Invalid)
        );
    }

    #[test]
    fn test_integer_overflow() {
        assert_eq!(
            parse_integer::<i8, _>("128", &invariant()),
            Err(NumberError::Overflow)
        );
        assert_eq!(
            parse_integer::<i8, _>("-129", &invariant()),
            Err(NumberError::Overflow)
        );
    }

    #[test]
    fn test_unsigned_negative_is_overflow() {
        assert_eq!(
            parse_integer::<u32, _>("-1", &invariant()),
            Err(NumberError::Overflow)
        );
        assert_eq!(parse_integer::<u32, _>("-0", &invariant()), Ok(0));
    }

    #[test]
    fn test_empty_and_sign_only_invalid() {
        assert_eq!(parse_integer::<i32, _>("", &invariant()), Err(NumberError::Invalid));
        assert_eq!(parse_integer::<i32, _>("-", &invariant()), Err(NumberError::Invalid));
        assert_eq!(parse_float::<f64, _>("  ", &invariant()), Err(NumberError::Invalid));
        assert_eq!(parse_float::<f64, _>(".", &invariant()), Err(NumberError::Invalid));
    }

    #[test]
    fn test_float_grouping_is_lenient() {
        assert_eq!(parse_float::<f64, _>("12,34.50", &culture("hi-IN")), Ok(1234.5));
        assert_eq!(parse_float::<f64, _>("1,2,3", &invariant()), Ok(123.0));
    }

    #[test]
    fn test_float_group_needs_leading_digit() {
        assert_eq!(parse_float::<f64, _>(",5", &invariant()), Err(NumberError::Invalid));
    }

    #[test]
    fn test_float_group_not_allowed_after_decimal() {
        assert_eq!(
            parse_float::<f64, _>("1.000,5", &invariant()),
            Err(NumberError::Invalid)
        );
    }

    #[test]
    fn test_float_comma_decimal() {
        assert_eq!(parse_float::<f64, _>("40.000,5", &culture("id-ID")), Ok(40000.5));
        assert_eq!(parse_float::<f64, _>("-0,25", &culture("de-DE")), Ok(-0.25));
    }

    #[test]
    fn test_float_space_matches_no_break_group() {
        assert_eq!(parse_float::<f64, _>("1 234,5", &culture("fr-FR")), Ok(1234.5));
        assert_eq!(
            parse_float::<f64, _>("1\u{202f}234,5", &culture("fr-FR")),
            Ok(1234.5)
        );
    }

    #[test]
    fn test_float_exponent() {
        assert_eq!(parse_float::<f64, _>("1.5e3", &invariant()), Ok(1500.0));
        assert_eq!(parse_float::<f64, _>("15E-1", &invariant()), Ok(1.5));
        assert_eq!(parse_float::<f64, _>("1e", &invariant()), Err(NumberError::Invalid));
    }

    #[test]
    fn test_float_partial_literals() {
        assert_eq!(parse_float::<f64, _>(".5", &invariant()), Ok(0.5));
        assert_eq!(parse_float::<f64, _>("5.", &invariant()), Ok(5.0));
    }

    #[test]
    fn test_float_overflow() {
        assert_eq!(parse_float::<f32, _>("1e39", &invariant()), Err(NumberError::Overflow));
        assert_eq!(parse_float::<f64, _>("-1e309", &invariant()), Err(NumberError::Overflow));
    }

    #[test]
    fn test_float_special_symbols() {
        assert!(parse_float::<f64, _>("nan", &invariant()).unwrap().is_nan());
        assert_eq!(parse_float::<f64, _>("Infinity", &invariant()), Ok(f64::INFINITY));
        assert_eq!(parse_float::<f64, _>("+infinity", &invariant()), Ok(f64::INFINITY));
        assert_eq!(
            parse_float::<f64, _>(" -Infinity ", &invariant()),
            Ok(f64::NEG_INFINITY)
        );
    }
}
