//! HTML escaping of strings and nested containers.
//!
//! The five HTML-significant characters are replaced by entities:
//!
//! | char | entity   |
//! |------|----------|
//! | `&`  | `&amp;`  |
//! | `<`  | `&lt;`   |
//! | `>`  | `&gt;`   |
//! | `"`  | `&quot;` |
//! | `'`  | `&#039;` |
//!
//! Existing entities are escaped again, so escaping is not idempotent:
//! `&lt;` becomes `&amp;lt;`. Escape once, at the output boundary.
//!
//! Containers are walked recursively with the resolved [`Encoding`] passed
//! down explicitly; string leaves are rewritten in place, keys and non-string
//! leaves are left alone, and key order is preserved.

use crate::encoding::Encoding;
use crate::error::Result;
use serde_json::Value;

/// Escape a value, resolving `encoding` first.
///
/// - strings are escaped;
/// - arrays and objects are copied with every string leaf escaped, to any
///   depth;
/// - numbers, booleans and `null` are returned unchanged.
///
/// # Errors
///
/// Returns [`crate::SanitizeError::UnsupportedEncoding`] when `encoding` is
/// not a supported label, whatever the shape of `value`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sanitize_core::escape;
///
/// let value = json!({"a": "<x>", "b": [1, "<y>", {"c": "<z>"}]});
/// assert_eq!(
///     escape(&value, "UTF-8").unwrap(),
///     json!({"a": "&lt;x&gt;", "b": [1, "&lt;y&gt;", {"c": "&lt;z&gt;"}]})
/// );
/// assert_eq!(escape(&json!(42), "UTF-8").unwrap(), json!(42));
/// ```
pub fn escape(value: &Value, encoding: &str) -> Result<Value> {
    let encoding = Encoding::from_label(encoding)?;
    Ok(escape_with(value, encoding))
}

/// Escape a value with an already-resolved encoding. Never fails.
pub fn escape_with(value: &Value, encoding: Encoding) -> Value {
    match value {
        Value::String(s) => Value::String(escape_str(s, encoding)),
        Value::Array(_) | Value::Object(_) => {
            let mut copy = value.clone();
            escape_in_place(&mut copy, encoding);
            copy
        }
        other => other.clone(),
    }
}

/// Escape every string leaf of `value` in place.
///
/// Arrays and objects keep their length, keys and order; only string leaves
/// are rewritten. Strings with nothing to escape are not reallocated.
pub fn escape_in_place(value: &mut Value, encoding: Encoding) {
    tracing::trace!(encoding = encoding.name(), "escaping value in place");
    escape_node(value, encoding);
}

fn escape_node(value: &mut Value, encoding: Encoding) {
    match value {
        Value::String(s) => {
            if needs_escape(s) {
                *s = escape_str(s, encoding);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                escape_node(item, encoding);
            }
        }
        Value::Object(map) => {
            for (_key, item) in map.iter_mut() {
                escape_node(item, encoding);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Escape a single string.
///
/// Input is Unicode text, so every ASCII-compatible encoding places the five
/// special characters at the same code points and the output is the same for
/// all of them.
///
/// # Examples
///
/// ```
/// use sanitize_core::{escape_str, Encoding};
///
/// assert_eq!(escape_str("<b>hi</b>", Encoding::UTF_8), "&lt;b&gt;hi&lt;/b&gt;");
/// assert_eq!(escape_str("it's \"5\" & up", Encoding::UTF_8), "it&#039;s &quot;5&quot; &amp; up");
/// ```
pub fn escape_str(s: &str, _encoding: Encoding) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Parse JSON text, escape it recursively, and serialize it back.
///
/// # Errors
///
/// Returns an error if `json` is not valid JSON or `encoding` is unsupported.
///
/// # Examples
///
/// ```
/// use sanitize_core::escape_json;
///
/// let out = escape_json(r#"{"name":"<Alice>","age":30}"#, "utf-8").unwrap();
/// assert_eq!(out, r#"{"name":"&lt;Alice&gt;","age":30}"#);
/// ```
pub fn escape_json(json: &str, encoding: &str) -> Result<String> {
    let encoding = Encoding::from_label(encoding)?;
    let mut value: Value = serde_json::from_str(json)?;
    escape_in_place(&mut value, encoding);
    Ok(serde_json::to_string(&value)?)
}

fn needs_escape(s: &str) -> bool {
    s.contains(['&', '<', '>', '"', '\''])
}
