//! Type casting -- force a value into a specific representation.
//!
//! [`cast`] never fails: every value converts to every [`CastKind`] using the
//! coercion rules in [`crate::value`]. Unknown kind tags fall back to
//! [`CastKind::String`], so `"bogus".parse::<CastKind>()` is a string cast.

use crate::value::{to_bool, to_float, to_int, to_string_value};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Key used when a scalar is wrapped into an object.
pub const SCALAR_KEY: &str = "scalar";

/// Target representation for [`cast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CastKind {
    Array,
    Bool,
    Float,
    Int,
    Object,
    /// The default, and the fallback for unrecognized tags.
    #[default]
    String,
}

impl CastKind {
    /// Every kind, in tag order.
    pub const ALL: [CastKind; 6] = [
        CastKind::Array,
        CastKind::Bool,
        CastKind::Float,
        CastKind::Int,
        CastKind::Object,
        CastKind::String,
    ];

    /// Resolve a kind tag. Matching is exact (`"int"`, not `"Int"`);
    /// anything unrecognized is [`CastKind::String`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "array" => Self::Array,
            "bool" => Self::Bool,
            "float" => Self::Float,
            "int" => Self::Int,
            "object" => Self::Object,
            _ => Self::String,
        }
    }

    /// The tag naming this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Object => "object",
            Self::String => "string",
        }
    }
}

impl FromStr for CastKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for CastKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl fmt::Display for CastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cast `value` to the representation named by `kind`.
///
/// - `Int`, `Float`, `Bool`, `String` -- see [`crate::value`] for the rules.
///   A float cast whose result is not finite (e.g. `"1e999"`) yields `null`,
///   since JSON numbers cannot hold infinities.
/// - `Object` -- see [`to_object`].
/// - `Array` -- see [`to_array`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sanitize_core::{cast, CastKind};
///
/// assert_eq!(cast(&json!("12abc"), CastKind::Int), json!(12));
/// assert_eq!(cast(&json!("0"), CastKind::Bool), json!(false));
/// assert_eq!(cast(&json!(true), CastKind::String), json!("1"));
/// assert_eq!(cast(&json!(5), CastKind::Array), json!([5]));
/// assert_eq!(cast(&json!(5), "bogus".parse().unwrap()), json!("5"));
/// ```
pub fn cast(value: &Value, kind: CastKind) -> Value {
    match kind {
        CastKind::Int => Value::from(to_int(value)),
        CastKind::Float => Number::from_f64(to_float(value)).map_or(Value::Null, Value::Number),
        CastKind::Bool => Value::Bool(to_bool(value)),
        CastKind::Object => Value::Object(to_object(value)),
        CastKind::Array => to_array(value),
        CastKind::String => Value::String(to_string_value(value)),
    }
}

/// Convert `value` into a keyed mapping.
///
/// Objects are returned as-is; arrays are keyed by stringified index; `null`
/// becomes an empty mapping; any other scalar is wrapped as
/// `{"scalar": value}`.
pub fn to_object(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.clone()))
            .collect(),
        Value::Null => Map::new(),
        scalar => {
            let mut map = Map::new();
            map.insert(SCALAR_KEY.to_string(), scalar.clone());
            map
        }
    }
}

/// Convert `value` into a container.
///
/// Arrays and objects are returned as-is (a keyed container stays keyed);
/// `null` becomes `[]`; any other scalar becomes a one-element array.
pub fn to_array(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => value.clone(),
        Value::Null => Value::Array(Vec::new()),
        scalar => Value::Array(vec![scalar.clone()]),
    }
}
