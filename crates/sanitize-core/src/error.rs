//! Error types for sanitize operations.

use thiserror::Error;

/// Errors that can occur while sanitizing.
///
/// Casting, filtering and path normalization are total; only escaping can
/// fail, and only because of its encoding argument or malformed JSON text.
#[derive(Error, Debug)]
pub enum SanitizeError {
    /// The encoding label is unknown, or names a character set that is not
    /// ASCII-compatible (UTF-16, ISO-2022-JP, ...).
    #[error("unsupported encoding: '{0}'")]
    UnsupportedEncoding(String),

    /// The input string was not valid JSON (JSON-text conveniences only).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout sanitize-core.
pub type Result<T> = std::result::Result<T, SanitizeError>;
