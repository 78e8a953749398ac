//! Locale formatting rules used while parsing text.
//!
//! The converter never guesses at locale conventions. Every separator,
//! sign, and date pattern comes from a [`FormatProvider`] supplied by the
//! caller, or from the invariant culture when none is given.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Supplies culture-specific conventions for number and date parsing.
pub trait FormatProvider {
    /// Separator between the integral and fractional parts.
    fn decimal_separator(&self) -> &str;

    /// Separator between digit groups in the integral part.
    fn group_separator(&self) -> &str;

    /// Leading sign marking a negative number.
    fn negative_sign(&self) -> &str;

    /// Leading sign marking a positive number.
    fn positive_sign(&self) -> &str;

    /// Symbol for not-a-number.
    fn nan_symbol(&self) -> &str;

    /// Symbol for positive infinity.
    fn positive_infinity_symbol(&self) -> &str;

    /// Symbol for negative infinity.
    fn negative_infinity_symbol(&self) -> &str;

    /// `chrono` format strings accepted for dates, tried in order.
    fn date_patterns(&self) -> &[String];

    /// `chrono` format strings accepted for dates with times, tried in order.
    fn date_time_patterns(&self) -> &[String];
}

/// A named set of formatting conventions.
///
/// All fields default to the invariant culture, so a configuration file
/// only needs to spell out what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Culture {
    /// Culture name, e.g. `de-DE`. Empty for the invariant culture.
    pub name: String,
    /// Decimal separator.
    pub decimal_separator: String,
    /// Digit group separator.
    pub group_separator: String,
    /// Negative sign.
    pub negative_sign: String,
    /// Positive sign.
    pub positive_sign: String,
    /// Not-a-number symbol.
    pub nan_symbol: String,
    /// Positive infinity symbol.
    pub positive_infinity_symbol: String,
    /// Negative infinity symbol.
    pub negative_infinity_symbol: String,
    /// Date patterns in `chrono` strftime syntax.
    pub date_patterns: Vec<String>,
    /// Date-time patterns in `chrono` strftime syntax.
    pub date_time_patterns: Vec<String>,
}

static INVARIANT: LazyLock<Culture> = LazyLock::new(Culture::invariant);

/// Names of the built-in cultures, in lookup order.
pub const BUILTIN_CULTURES: &[&str] = &[
    "invariant",
    "en-US",
    "en-AU",
    "en-GB",
    "id-ID",
    "hi-IN",
    "de-DE",
    "fr-FR",
    "de-CH",
];

impl Culture {
    /// The culture-independent conventions.
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            decimal_separator: ".".into(),
            group_separator: ",".into(),
            negative_sign: "-".into(),
            positive_sign: "+".into(),
            nan_symbol: "NaN".into(),
            positive_infinity_symbol: "Infinity".into(),
            negative_infinity_symbol: "-Infinity".into(),
            date_patterns: patterns(&["%m/%d/%Y"]),
            date_time_patterns: patterns(&["%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"]),
        }
    }

    /// Returns a shared reference to the invariant culture.
    pub fn invariant_ref() -> &'static Culture {
        &INVARIANT
    }

    /// Looks up a built-in culture by name, ignoring ASCII case.
    ///
    /// An empty name or `invariant` yields the invariant culture.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("invariant") {
            return Some(Self::invariant());
        }

        let culture = match name.to_ascii_lowercase().as_str() {
            "en-us" => Self::builder("en-US", ".", ",")
                .dates(&["%m/%d/%Y"], &["%m/%d/%Y %I:%M:%S %p", "%m/%d/%Y %H:%M:%S"]),
            "en-au" => Self::builder("en-AU", ".", ",")
                .dates(&["%d/%m/%Y"], &["%d/%m/%Y %I:%M:%S %p", "%d/%m/%Y %H:%M:%S"]),
            "en-gb" => Self::builder("en-GB", ".", ",")
                .dates(&["%d/%m/%Y"], &["%d/%m/%Y %H:%M:%S"]),
            "id-id" => Self::builder("id-ID", ",", ".")
                .dates(&["%d/%m/%Y"], &["%d/%m/%Y %H.%M.%S", "%d/%m/%Y %H:%M:%S"]),
            "hi-in" => Self::builder("hi-IN", ".", ",")
                .dates(&["%d/%m/%Y", "%d-%m-%Y"], &["%d/%m/%Y %I:%M:%S %p", "%d/%m/%Y %H:%M:%S"]),
            "de-de" => Self::builder("de-DE", ",", ".")
                .dates(&["%d.%m.%Y"], &["%d.%m.%Y %H:%M:%S", "%d.%m.%Y %H:%M"]),
            "fr-fr" => Self::builder("fr-FR", ",", "\u{202f}")
                .dates(&["%d/%m/%Y"], &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"]),
            "de-ch" => Self::builder("de-CH", ".", "\u{2019}")
                .dates(&["%d.%m.%Y"], &["%d.%m.%Y %H:%M:%S"]),
            _ => return None,
        };

        Some(culture)
    }

    fn builder(name: &str, decimal: &str, group: &str) -> Self {
        Self {
            name: name.into(),
            decimal_separator: decimal.into(),
            group_separator: group.into(),
            ..Self::invariant()
        }
    }

    fn dates(mut self, date: &[&str], date_time: &[&str]) -> Self {
        self.date_patterns = patterns(date);
        self.date_time_patterns = patterns(date_time);
        self
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl FormatProvider for Culture {
    fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    fn group_separator(&self) -> &str {
        &self.group_separator
    }

    fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    fn positive_sign(&self) -> &str {
        &self.positive_sign
    }

    fn nan_symbol(&self) -> &str {
        &self.nan_symbol
    }

    fn positive_infinity_symbol(&self) -> &str {
        &self.positive_infinity_symbol
    }

    fn negative_infinity_symbol(&self) -> &str {
        &self.negative_infinity_symbol
    }

    fn date_patterns(&self) -> &[String] {
        &self.date_patterns
    }

    fn date_time_patterns(&self) -> &[String] {
        &self.date_time_patterns
    }
}

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| (*p).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let culture = Culture::from_name("DE-de").unwrap();
        assert_eq!(culture.name, "de-DE");
        assert_eq!(culture.decimal_separator(), ",");
        assert_eq!(culture.group_separator(), ".");
    }

    #[test]
    fn test_empty_name_is_invariant() {
        assert_eq!(Culture::from_name("").unwrap(), Culture::invariant());
        assert_eq!(Culture::from_name("Invariant").unwrap(), Culture::invariant());
    }

    #[test]
    fn test_unknown_culture() {
        assert!(Culture::from_name("xx-YY").is_none());
    }

    #[test]
    fn test_every_builtin_resolves() {
        for name in BUILTIN_CULTURES {
            assert!(Culture::from_name(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn test_partial_toml_falls_back_to_invariant() {
        let culture: Culture = toml::from_str(
            r#"
            name = "x-swiss-bank"
            group_separator = "'"
            "#,
        )
        .unwrap();

        assert_eq!(culture.group_separator(), "'");
        assert_eq!(culture.decimal_separator(), ".");
        assert_eq!(culture.date_patterns(), Culture::invariant().date_patterns());
    }
}
