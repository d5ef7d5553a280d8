//! Text encodings understood by the string readers.

use crate::error::{DecodeError, Result, Unsupported};
use alloc::string::{String, ToString};

/// A decoder for a character set that is not built into this crate.
///
/// Register one with [`Encoding::Custom`].
pub trait TextDecoder: Sync {
    /// The label of the character set, used in diagnostics.
    fn label(&self) -> &str;

    /// Decodes `bytes` into a string. Malformed input must be reported as an error, not replaced.
    fn decode(&self, bytes: &[u8]) -> Result<String>;
}

/// Identifies how the bytes of a string field are decoded.
#[derive(Copy, Clone, Default)]
pub enum Encoding {
    /// Each byte becomes the character with the same code point. Never fails.
    #[default]
    Ascii,
    /// A character set from the WHATWG Encoding Standard, decoded strictly.
    Named(&'static encoding_rs::Encoding),
    /// A character set supplied by the caller.
    Custom(&'static dyn TextDecoder),
}

impl core::fmt::Debug for Encoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ascii => f.write_str("Ascii"),
            Self::Named(e) => f.debug_tuple("Named").field(&e.name()).finish(),
            Self::Custom(d) => f.debug_tuple("Custom").field(&d.label()).finish(),
        }
    }
}

impl Encoding {
    /// UTF-8.
    pub fn utf8() -> Self {
        Self::Named(encoding_rs::UTF_8)
    }

    /// UTF-16, least-significant byte of each code unit first.
    pub fn utf16le() -> Self {
        Self::Named(encoding_rs::UTF_16LE)
    }

    /// UTF-16, most-significant byte of each code unit first.
    pub fn utf16be() -> Self {
        Self::Named(encoding_rs::UTF_16BE)
    }

    /// Looks up an encoding by its label, e.g. `"UTF-8"`, `"Shift_JIS"` or `"ascii"`.
    ///
    /// `"ASCII"` (any case) selects the byte pass-through. Every other label is resolved with
    /// the WHATWG label table, so `"ISO-8859-1"` means windows-1252. Labels with no decoder
    /// produce `Unsupported::Encoding` instead of guessing.
    pub fn from_label(label: &str) -> Result<Self> {
        if label.eq_ignore_ascii_case("ASCII") {
            return Ok(Self::Ascii);
        }
        match encoding_rs::Encoding::for_label_no_replacement(label.as_bytes()) {
            Some(encoding) => Ok(Self::Named(encoding)),
            None => {
                log::debug!("no decoder registered for encoding label {label:?}");
                Err(Unsupported::Encoding(label.to_string()).into())
            }
        }
    }

    /// The canonical label of this encoding.
    pub fn label(&self) -> &str {
        match self {
            Self::Ascii => "ASCII",
            Self::Named(e) => e.name(),
            Self::Custom(d) => d.label(),
        }
    }

    /// Decodes `bytes` into a string.
    ///
    /// Malformed input fails with `DecodeError::Malformed`; nothing is replaced. A byte order mark
    /// is decoded like any other character.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Ascii => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Named(e) => match e.decode_without_bom_handling_and_without_replacement(bytes) {
                Some(s) => Ok(s.into_owned()),
                None => Err(DecodeError::Malformed(e.name()).into()),
            },
            Self::Custom(d) => d.decode(bytes),
        }
    }
}

/// Decodes `bytes` with `encoding`, where `None` means [`Encoding::Ascii`].
pub(crate) fn decode_opt(bytes: &[u8], encoding: Option<Encoding>) -> Result<String> {
    encoding.unwrap_or_default().decode(bytes)
}
