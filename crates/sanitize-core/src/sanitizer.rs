//! A configured entry point bundling every operation.

use crate::cast::{cast, CastKind};
use crate::encoding::Encoding;
use crate::error::Result;
use crate::escape::{escape_in_place, escape_str, escape_with};
use crate::filter::{filter_email, filter_url};
use crate::path::normalize_path;
use serde_json::Value;

/// Sanitizer carrying a default escape [`Encoding`].
///
/// The handle is `Copy` and holds no mutable state, so one instance can be
/// shared freely across threads.
///
/// ```
/// use serde_json::json;
/// use sanitize_core::Sanitizer;
///
/// let sanitizer = Sanitizer::with_encoding("Shift_JIS").unwrap();
/// assert_eq!(sanitizer.escape(&json!(["<a>"])), json!(["&lt;a&gt;"]));
/// assert_eq!(sanitizer.path("/x/", false), "x");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sanitizer {
    encoding: Encoding,
}

impl Sanitizer {
    /// A sanitizer escaping with UTF-8.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sanitizer escaping with the encoding named by `label`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SanitizeError::UnsupportedEncoding`] for unknown or
    /// non-ASCII-compatible labels.
    pub fn with_encoding(label: &str) -> Result<Self> {
        Ok(Self {
            encoding: Encoding::from_label(label)?,
        })
    }

    /// The configured escape encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// See [`crate::cast()`].
    pub fn cast(&self, value: &Value, kind: CastKind) -> Value {
        cast(value, kind)
    }

    /// See [`crate::filter_email`].
    pub fn email(&self, value: &str) -> String {
        filter_email(value)
    }

    /// See [`crate::filter_url`].
    pub fn url(&self, value: &str) -> String {
        filter_url(value)
    }

    /// See [`crate::normalize_path`].
    pub fn path(&self, path: &str, trailing_slash: bool) -> String {
        normalize_path(path, trailing_slash)
    }

    /// Escape `value` with the configured encoding.
    pub fn escape(&self, value: &Value) -> Value {
        escape_with(value, self.encoding)
    }

    /// Escape `value` in place with the configured encoding.
    pub fn escape_in_place(&self, value: &mut Value) {
        escape_in_place(value, self.encoding);
    }

    /// Escape a single string with the configured encoding.
    pub fn escape_str(&self, s: &str) -> String {
        escape_str(s, self.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn methods_delegate_to_free_functions() {
        let s = Sanitizer::new();
        assert_eq!(s.cast(&json!("7 days"), CastKind::Int), json!(7));
        assert_eq!(s.email("a b@c.d<>"), "ab@c.d");
        assert_eq!(s.url("http://a b/"), "http://ab/");
        assert_eq!(s.path("\\x\\y", true), "/x/y/");
        assert_eq!(s.escape(&json!(1)), json!(1));
    }

    #[test]
    fn is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Sanitizer>();
    }
}
