//! Tag and field lookups on decoded objects
//!
//! Used by hand-written decoders to pick a constructor and read named fields.

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, JsonKind, Result};
use crate::options::{DEFAULT_ENCODING, SumEncoding};

impl SumEncoding {
    /// Read the constructor name of an encoded value
    ///
    /// Accepts a tagged object or a bare string (a constructor encoded by
    /// name only).
    pub fn tag_of<'a>(&self, json: &'a Value) -> Result<&'a str> {
        match json {
            Value::String(tag) => Ok(tag.as_str()),
            Value::Object(fields) => match fields.get(&self.tag_field) {
                Some(Value::String(tag)) => Ok(tag.as_str()),
                Some(other) => Err(Error::type_mismatch(JsonKind::String, other)),
                None => {
                    debug!(field = %self.tag_field, "constructor object has no tag");
                    Err(Error::missing_field(&self.tag_field, json))
                }
            },
            other => Err(Error::type_mismatch(JsonKind::Object, other)),
        }
    }
}

/// Read the constructor name using the default `tag` field
pub fn get_tag(json: &Value) -> Result<&str> {
    DEFAULT_ENCODING.tag_of(json)
}

/// Look up a field of an object, without searching nested objects
pub fn var_named<'a>(json: &'a Value, name: &str) -> Result<&'a Value> {
    match json {
        Value::Object(fields) => fields
            .get(name)
            .ok_or_else(|| Error::missing_field(name, json)),
        other => Err(Error::type_mismatch(JsonKind::Object, other)),
    }
}
