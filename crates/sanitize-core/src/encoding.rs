//! Character-encoding labels accepted by the escaper.
//!
//! Labels are resolved through the WHATWG label table (`encoding_rs`), so
//! `"utf8"`, `"UTF-8"`, `"latin1"`, `"Shift_JIS"` and friends all work. Only
//! ASCII-compatible encodings are accepted: the five HTML-significant
//! characters must occupy their ASCII bytes for entity substitution to be
//! correct.

use crate::error::{Result, SanitizeError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A resolved, escape-safe character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding(&'static encoding_rs::Encoding);

impl Encoding {
    /// UTF-8, the default for every escaping operation.
    pub const UTF_8: Encoding = Encoding(&encoding_rs::UTF_8_INIT);

    /// Resolve an encoding label.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. The
    /// empty label means the default (UTF-8).
    ///
    /// # Errors
    ///
    /// Returns [`SanitizeError::UnsupportedEncoding`] for unknown labels and
    /// for encodings that are not ASCII-compatible.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanitize_core::Encoding;
    ///
    /// assert_eq!(Encoding::from_label("utf8").unwrap(), Encoding::UTF_8);
    /// assert_eq!(Encoding::from_label("latin1").unwrap().name(), "windows-1252");
    /// assert!(Encoding::from_label("UTF-16LE").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Ok(Self::UTF_8);
        }
        match encoding_rs::Encoding::for_label_no_replacement(trimmed.as_bytes()) {
            Some(enc) if enc.is_ascii_compatible() => Ok(Self(enc)),
            Some(enc) => {
                tracing::debug!(label, resolved = enc.name(), "encoding is not ASCII-compatible");
                Err(SanitizeError::UnsupportedEncoding(label.to_string()))
            }
            None => {
                tracing::debug!(label, "unknown encoding label");
                Err(SanitizeError::UnsupportedEncoding(label.to_string()))
            }
        }
    }

    /// Canonical name of the encoding (e.g. `"UTF-8"`, `"Shift_JIS"`).
    pub fn name(self) -> &'static str {
        self.0.name()
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::UTF_8
    }
}

impl FromStr for Encoding {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
