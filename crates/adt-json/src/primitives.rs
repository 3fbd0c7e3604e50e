//! Leaf converters for integers, floats, strings and booleans

use serde_json::Value;

use crate::convert::{FromJson, ToJson};
use crate::error::{Error, JsonKind};

/// Encode an integer as an exact JSON number
pub fn int_to_json() -> ToJson<i64> {
    ToJson::new(|n: &i64| Value::from(*n))
}

/// Decode a JSON number as an integer
///
/// Fractional numbers are rounded to the nearest integer (halves away from
/// zero) and saturate at the `i64` bounds. This is lossy, not an error.
pub fn int_from_json() -> FromJson<i64> {
    FromJson::new(|json: &Value| match json {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .ok_or_else(|| Error::type_mismatch(JsonKind::Number, json)),
        other => Err(Error::type_mismatch(JsonKind::Number, other)),
    })
}

/// Encode a float as a JSON number
///
/// NaN and the infinities have no JSON representation and encode as `null`.
pub fn float_to_json() -> ToJson<f64> {
    ToJson::new(|f: &f64| Value::from(*f))
}

/// Decode a JSON number as a float
pub fn float_from_json() -> FromJson<f64> {
    FromJson::new(|json: &Value| match json {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::type_mismatch(JsonKind::Number, json)),
        other => Err(Error::type_mismatch(JsonKind::Number, other)),
    })
}

/// Encode text as a JSON string
pub fn string_to_json() -> ToJson<String> {
    ToJson::new(|s: &String| Value::String(s.clone()))
}

/// Decode a JSON string
pub fn string_from_json() -> FromJson<String> {
    FromJson::new(|json: &Value| match json {
        Value::String(s) => Ok(s.clone()),
        other => Err(Error::type_mismatch(JsonKind::String, other)),
    })
}

/// Encode a boolean
pub fn bool_to_json() -> ToJson<bool> {
    ToJson::new(|b: &bool| Value::Bool(*b))
}

/// Decode a JSON boolean
pub fn bool_from_json() -> FromJson<bool> {
    FromJson::new(|json: &Value| match json {
        Value::Bool(b) => Ok(*b),
        other => Err(Error::type_mismatch(JsonKind::Bool, other)),
    })
}
