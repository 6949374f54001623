//! BOM Signatures
//!
//! Each signature is a fixed byte pattern that may open a text file.
//! A signature matches when its whole pattern lies inside the bytes
//! actually read; bytes past the end of a short file never match.

use serde::Serialize;

/// Canonical encoding names
pub const UTF_8: &str = "UTF-8";
pub const UTF_16BE: &str = "UTF-16BE";
pub const UTF_16LE: &str = "UTF-16LE";
pub const UTF_32BE: &str = "UTF-32BE";
pub const UTF_32LE: &str = "UTF-32LE";
pub const UNICODE: &str = "UNICODE";

/// Longest signature, and the number of leading bytes read from a file
pub const MAX_SIGNATURE_LEN: usize = 4;

/// Byte-order-mark signatures known to the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BomSignature {
    /// EF BB BF
    Utf8,
    /// FE FF
    Utf16Be,
    /// FF FE
    Utf16Le,
    /// 00 00 FE FF
    Utf32Be,
    /// FF FE 00 00
    Utf32Le,
    /// FF FE, reported under the legacy "UNICODE" alias
    Unicode,
}

impl BomSignature {
    /// Byte pattern that identifies this signature
    pub const fn pattern(self) -> &'static [u8] {
        match self {
            BomSignature::Utf8 => &[0xEF, 0xBB, 0xBF],
            BomSignature::Utf16Be => &[0xFE, 0xFF],
            BomSignature::Utf16Le | BomSignature::Unicode => &[0xFF, 0xFE],
            BomSignature::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
            BomSignature::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
        }
    }

    /// Length of the BOM in bytes
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.pattern().len()
    }

    /// Encoding name reported when this signature matches
    pub const fn encoding_name(self) -> &'static str {
        match self {
            BomSignature::Utf8 => UTF_8,
            BomSignature::Utf16Be => UTF_16BE,
            BomSignature::Utf16Le => UTF_16LE,
            BomSignature::Utf32Be => UTF_32BE,
            BomSignature::Utf32Le => UTF_32LE,
            BomSignature::Unicode => UNICODE,
        }
    }

    /// Check whether `bytes` (the bytes actually read) start with this signature
    #[inline]
    pub fn matches(self, bytes: &[u8]) -> bool {
        bytes.starts_with(self.pattern())
    }
}

impl std::fmt::Display for BomSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.encoding_name())
    }
}
