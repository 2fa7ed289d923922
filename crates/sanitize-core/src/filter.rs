//! Character allow-list filtering for email addresses and URLs.
//!
//! Filtering strips characters; it never validates. `filter_email("a@@b")`
//! keeps both `@` signs, and `filter_url("not a url")` returns `"notaurl"`.
//! Only ASCII survives either filter.

/// Punctuation permitted in an email address, besides letters and digits.
const EMAIL_SYMBOLS: &str = "!#$%&'*+-=?^_`{|}~@.[]";

/// Punctuation permitted in a URL, besides letters and digits.
const URL_SYMBOLS: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

/// Strip every character that cannot appear in an email address.
///
/// Letters, digits and `` !#$%&'*+-=?^_`{|}~@.[] `` are kept; whitespace,
/// angle brackets, quotes, non-ASCII and everything else are removed.
///
/// # Examples
///
/// ```
/// use sanitize_core::filter_email;
///
/// assert_eq!(filter_email(" john@@example.com<>"), "john@@example.com");
/// assert_eq!(filter_email("jö hn(x)@example.com"), "jhnx@example.com");
/// ```
pub fn filter_email(value: &str) -> String {
    retain_allowed(value, EMAIL_SYMBOLS)
}

/// Strip every character that cannot appear in a URL.
///
/// Letters, digits and `` $-_.+!*'(),{}|\^~[]`<>#%";/?:@&= `` are kept.
///
/// # Examples
///
/// ```
/// use sanitize_core::filter_url;
///
/// assert_eq!(
///     filter_url("https://exa mple.com/ä?q=1\n"),
///     "https://example.com/?q=1"
/// );
/// ```
pub fn filter_url(value: &str) -> String {
    retain_allowed(value, URL_SYMBOLS)
}

fn retain_allowed(value: &str, symbols: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || symbols.contains(*ch))
        .collect()
}
