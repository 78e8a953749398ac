//! Text to byte conversion.

use encoding_rs::Encoding;
use std::fmt;

/// Character encodings used to turn text into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// UTF-16, little-endian, no byte order mark.
    Utf16Le,
    /// UTF-16, big-endian, no byte order mark.
    Utf16Be,
    /// 7-bit ASCII; other characters become `?`.
    Ascii,
    /// Any other WHATWG encoding. Unmappable characters are written as
    /// HTML numeric character references.
    Other(&'static Encoding),
}

impl TextEncoding {
    /// Resolves an encoding label such as `utf-8`, `utf-16be` or `shift_jis`.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        let encoding = match label.as_str() {
            "utf-8" | "utf8" => TextEncoding::Utf8,
            "utf-16" | "utf-16le" | "utf16" | "unicode" => TextEncoding::Utf16Le,
            "utf-16be" | "unicodefffe" => TextEncoding::Utf16Be,
            "ascii" | "us-ascii" => TextEncoding::Ascii,
            _ => {
                let encoding = Encoding::for_label(label.as_bytes())?;
                if encoding == encoding_rs::UTF_8 {
                    TextEncoding::Utf8
                } else if encoding == encoding_rs::UTF_16LE {
                    TextEncoding::Utf16Le
                } else if encoding == encoding_rs::UTF_16BE {
                    TextEncoding::Utf16Be
                } else if encoding == encoding_rs::REPLACEMENT {
                    return None;
                } else {
                    TextEncoding::Other(encoding)
                }
            }
        };
        Some(encoding)
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Ascii => "US-ASCII",
            TextEncoding::Other(encoding) => encoding.name(),
        }
    }

    /// Encodes `text` into bytes.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            TextEncoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            TextEncoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            TextEncoding::Other(encoding) => {
                let (bytes, _, _) = encoding.encode(text);
                bytes.into_owned()
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts `text` to bytes.
///
/// Absent text is treated as the empty string and an absent encoding as
/// UTF-8. Never fails.
pub fn to_byte_array(text: Option<&str>, encoding: Option<TextEncoding>) -> Vec<u8> {
    encoding.unwrap_or_default().encode(text.unwrap_or_default())
}
