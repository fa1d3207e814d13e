//! Text decoding for exported files.
//!
//! Bibliographic exports are usually UTF-8, but files that passed through a
//! spreadsheet are often re-saved as Windows-1252 or ISO-8859-1. The loader tries
//! the encodings of [`TextEncoding::DEFAULT_ORDER`] one after the other and keeps
//! the first that decodes the whole input.

use crate::error::DataSourceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte order mark that spreadsheet tools put in front of UTF-8 CSV files.
const UTF8_BOM: &str = "\u{feff}";

/// Windows-1252 code points for bytes 0x80..=0x9F. `None` marks the five bytes
/// the code page leaves undefined.
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// A text encoding the loader can try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Strict UTF-8. A leading byte order mark is removed.
    Utf8,
    /// Windows code page 1252. Fails on the five undefined bytes.
    Windows1252,
    /// ISO-8859-1 (latin1). Every byte maps to a character, so this never fails.
    Latin1,
}

impl TextEncoding {
    /// Order in which encodings are tried when none is configured.
    pub const DEFAULT_ORDER: [TextEncoding; 3] = [
        TextEncoding::Utf8,
        TextEncoding::Windows1252,
        TextEncoding::Latin1,
    ];

    /// Conventional label of the encoding.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1252 => "windows-1252",
            TextEncoding::Latin1 => "iso-8859-1",
        }
    }

    /// Decodes `bytes`, returning `None` if they are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let text = std::str::from_utf8(bytes).ok()?;
                Some(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
            }
            TextEncoding::Windows1252 => bytes
                .iter()
                .map(|&byte| match byte {
                    0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(byte - 0x80)],
                    _ => Some(char::from(byte)),
                })
                .collect(),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&byte| char::from(byte)).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decodes `bytes` with the first encoding of `order` that accepts them.
///
/// # Errors
///
/// Returns [`DataSourceError::Encoding`] listing every encoding tried when none of
/// them decodes the input.
pub fn decode_first(
    bytes: &[u8],
    order: &[TextEncoding],
) -> Result<(TextEncoding, String), DataSourceError> {
    for &encoding in order {
        match encoding.decode(bytes) {
            Some(text) => return Ok((encoding, text)),
            None => log::debug!("input is not valid {encoding}"),
        }
    }
    Err(DataSourceError::Encoding {
        tried: order.to_vec(),
    })
}
