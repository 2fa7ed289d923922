//! Scalar coercion rules shared by [`crate::cast`].
//!
//! These follow the loose conversion rules of dynamic web runtimes rather than
//! Rust's strict parsing: `"12abc"` is `12`, `"abc"` is `0`, `"0"` is falsy
//! and an empty container is falsy. Conversions never fail.

use serde_json::{Number, Value};

/// String form of any container.
pub(crate) const CONTAINER_STRING: &str = "Array";

/// Significant digits used when printing floats.
const FLOAT_PRECISION: usize = 14;

/// Integer value of `value`.
///
/// Strings contribute their leading numeric prefix (after optional
/// whitespace). Floats truncate toward zero and saturate at the `i64` bounds;
/// NaN becomes 0. Containers are 1 when non-empty, 0 otherwise.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sanitize_core::value::to_int;
///
/// assert_eq!(to_int(&json!(" 42 apples")), 42);
/// assert_eq!(to_int(&json!("1e3")), 1000);
/// assert_eq!(to_int(&json!(-3.9)), -3);
/// assert_eq!(to_int(&json!("apples")), 0);
/// ```
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => number_to_int(n),
        Value::String(s) => string_to_int(s),
        Value::Array(arr) => i64::from(!arr.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
    }
}

/// Floating-point value of `value`, with the same string rules as [`to_int`].
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => match numeric_prefix(s) {
            Some(prefix) => prefix.text.parse().unwrap_or(0.0),
            None => 0.0,
        },
        Value::Array(arr) => f64::from(u8::from(!arr.is_empty())),
        Value::Object(map) => f64::from(u8::from(!map.is_empty())),
    }
}

/// Truthiness of `value`.
///
/// Falsy: `null`, `false`, `0`, `0.0`, `-0.0`, `""`, `"0"`, `[]` and `{}`.
/// Everything else, including `"0.0"` and `" "`, is truthy.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else {
                n.as_f64().is_some_and(|f| f != 0.0)
            }
        }
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// String form of `value`.
///
/// `null` and `false` print as `""`, `true` as `"1"`, containers as
/// `"Array"`. Floats print with 14 significant digits, switching to exponent
/// form (`1.0E+25`) outside the fixed-notation range.
pub fn to_string_value(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => CONTAINER_STRING.to_string(),
    }
}

fn number_to_int(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        return i;
    }
    if n.as_u64().is_some() {
        // Only values above i64::MAX fail as_i64 but pass as_u64.
        return i64::MAX;
    }
    n.as_f64().map_or(0, float_to_int)
}

/// Truncating, saturating float conversion; NaN is 0.
pub(crate) fn float_to_int(f: f64) -> i64 {
    // `as` saturates at the bounds and maps NaN to 0.
    f as i64
}

fn string_to_int(s: &str) -> i64 {
    let Some(prefix) = numeric_prefix(s) else {
        return 0;
    };
    if prefix.is_integer {
        prefix.text.parse().unwrap_or_else(|_| {
            // Digits-only prefix that overflowed i64.
            if prefix.text.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        })
    } else {
        let f: f64 = prefix.text.parse().unwrap_or(0.0);
        // Exponents past the f64 range parse to infinity, which is 0 here;
        // finite out-of-range values still saturate.
        if f.is_finite() {
            float_to_int(f)
        } else {
            0
        }
    }
}

/// Leading numeric portion of a string.
#[derive(Debug, PartialEq)]
struct NumericPrefix<'a> {
    text: &'a str,
    /// No fraction and no exponent were consumed.
    is_integer: bool,
}

/// Whitespace skipped before a numeric prefix and removed from paths.
pub(crate) fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Find the longest prefix of `s` (after leading whitespace) shaped like
/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit.
fn numeric_prefix(s: &str) -> Option<NumericPrefix<'_>> {
    let s = s.trim_start_matches(is_space);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut is_integer = true;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            is_integer = false;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
            is_integer = false;
        }
    }

    Some(NumericPrefix {
        text: &s[..end],
        is_integer,
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map_or_else(String::new, format_float)
}

/// Print a float the way loosely-typed runtimes do: 14 significant digits,
/// trailing zeros dropped, exponent form when the decimal exponent is below
/// -4 or above 13.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // d.ddddddddddddde<exp>
    let sci = format!("{:.*e}", FLOAT_PRECISION - 1, f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::with_capacity(digits.len() + 8);
    if f < 0.0 {
        out.push('-');
    }

    // Position of the decimal point relative to the first digit.
    let decpt = exp + 1;
    if decpt < -3 || decpt > FLOAT_PRECISION as i32 {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        out.push('.');
        out.push_str(if rest.is_empty() { "0" } else { rest });
        out.push('E');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&exp.abs().to_string());
    } else if decpt <= 0 {
        out.push_str("0.");
        for _ in 0..-decpt {
            out.push('0');
        }
        out.push_str(digits);
    } else {
        let point = decpt as usize;
        if digits.len() <= point {
            out.push_str(digits);
            for _ in digits.len()..point {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_prefix_shapes() {
        let p = numeric_prefix("  -12.5e3xyz").unwrap();
        assert_eq!(p.text, "-12.5e3");
        assert!(!p.is_integer);

        let p = numeric_prefix("42abc").unwrap();
        assert_eq!(p, NumericPrefix { text: "42", is_integer: true });

        // Dangling exponent is not consumed.
        let p = numeric_prefix("7e").unwrap();
        assert_eq!(p, NumericPrefix { text: "7", is_integer: true });

        assert_eq!(numeric_prefix(".5").unwrap().text, ".5");
        assert_eq!(numeric_prefix("5.").unwrap().text, "5.");
        assert!(numeric_prefix(".").is_none());
        assert!(numeric_prefix("-").is_none());
        assert!(numeric_prefix("abc").is_none());
        assert!(numeric_prefix("").is_none());
    }

    #[test]
    fn int_from_strings() {
        assert_eq!(to_int(&json!("0x1A")), 0);
        assert_eq!(to_int(&json!("+5")), 5);
        assert_eq!(to_int(&json!("\n\t-7 ")), -7);
        assert_eq!(to_int(&json!("1.9")), 1);
        assert_eq!(to_int(&json!("99999999999999999999")), i64::MAX);
        assert_eq!(to_int(&json!("-99999999999999999999")), i64::MIN);
        assert_eq!(to_int(&json!("1e999")), 0);
        assert_eq!(to_int(&json!("-1e999")), 0);
        assert_eq!(to_int(&json!("1e300")), i64::MAX);
        assert_eq!(to_int(&json!("-1e300")), i64::MIN);
    }

    #[test]
    fn int_from_numbers() {
        assert_eq!(to_int(&json!(u64::MAX)), i64::MAX);
        assert_eq!(to_int(&json!(1e300)), i64::MAX);
        assert_eq!(to_int(&json!(-2.5)), -2);
        assert_eq!(float_to_int(f64::NAN), 0);
    }

    #[test]
    fn float_formatting() {
        assert_eq!(format_float(1.0), "1");
        assert_eq!(format_float(-1.5), "-1.5");
        assert_eq!(format_float(0.1 + 0.2), "0.3");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1.0E-5");
        assert_eq!(format_float(1e25), "1.0E+25");
        assert_eq!(format_float(1.5e20), "1.5E+20");
        assert_eq!(format_float(1e14), "1.0E+14");
        assert_eq!(format_float(99_999_999_999_999.0), "99999999999999");
        assert_eq!(format_float(-0.0), "-0");
        assert_eq!(format_float(f64::INFINITY), "INF");
        assert_eq!(format_float(f64::NEG_INFINITY), "-INF");
        assert_eq!(format_float(f64::NAN), "NAN");
    }
}
