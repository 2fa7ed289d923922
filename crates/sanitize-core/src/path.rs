//! Path normalization.

use crate::value::is_space;

/// Normalize a slash-separated path.
///
/// 1. All whitespace is removed, wherever it occurs.
/// 2. Leading and trailing `/` are trimmed.
/// 3. `//`, `\\` and `\` each become a single `/`, in one left-to-right pass
///    (the longest match wins at each position and replaced text is not
///    rescanned).
/// 4. A single `/` is appended when `trailing_slash` is set.
///
/// Because step 3 is a single pass, heavily malformed input can still contain
/// doubled separators: `"a////b"` becomes `"a//b/"`.
///
/// # Examples
///
/// ```
/// use sanitize_core::normalize_path;
///
/// assert_eq!(normalize_path("  /a//b\\c\\\\d/  ", true), "a/b/c/d/");
/// assert_eq!(normalize_path("a/b", false), "a/b");
/// assert_eq!(normalize_path(" / ", true), "/");
/// ```
pub fn normalize_path(path: &str, trailing_slash: bool) -> String {
    let compact: String = path.chars().filter(|ch| !is_space(*ch)).collect();
    let trimmed = compact.trim_matches('/');

    let mut out = translate_separators(trimmed);
    if trailing_slash {
        out.push('/');
    }
    out
}

/// Single-pass translation of `//`, `\\` and `\` to `/`.
fn translate_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    let mut rest = path;
    while !rest.is_empty() {
        if let Some(tail) = rest
            .strip_prefix("//")
            .or_else(|| rest.strip_prefix("\\\\"))
            .or_else(|| rest.strip_prefix('\\'))
        {
            out.push('/');
            rest = tail;
            continue;
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out
}
