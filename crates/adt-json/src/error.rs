//! Error types for ADT JSON conversion
//!
//! Every decoder in this crate returns [`Result`]. Failures are never recovered
//! internally: the first shape mismatch is reported to the caller of the
//! top-level decode, carrying the offending value.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// The six variants of a JSON value, used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a value by its variant
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Main error type for encoding and decoding
#[derive(Error, Debug)]
pub enum Error {
    /// The value was not the variant the converter expects
    #[error("expected {expected}, found {}: {found}", JsonKind::of(.found))]
    TypeMismatch { expected: JsonKind, found: Value },

    /// A required object key is absent
    #[error("missing field `{field}` in {object}")]
    MissingField { field: String, object: Value },

    /// A map entry was not a two-element array
    #[error("map entry {index} is not a [key, value] pair: {entry}")]
    MalformedPair { index: usize, entry: Value },

    /// The value cannot hold constructor contents for the declared arity
    #[error("unsupported contents shape for a type with {num_ctors} constructors: {value}")]
    UnsupportedShape { num_ctors: usize, value: Value },

    /// A constructor carried the wrong number of arguments
    ///
    /// `tag` is `None` for product types, which carry no constructor name.
    #[error("{} expects {expected} arguments, found {found}", ConstructorLabel(.tag.as_deref()))]
    WrongArity {
        tag: Option<String>,
        expected: usize,
        found: usize,
    },

    /// The tag names no known constructor
    #[error("unknown constructor `{tag}`, expected one of: {expected}")]
    UnknownTag { tag: String, expected: String },

    /// JSON text could not be parsed
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoding options could not be loaded
    #[error("invalid encoding options: {0}")]
    Options(#[from] toml::de::Error),

    /// Encoding options use one key for both the tag and the contents
    #[error("tag and contents fields must differ, both are `{0}`")]
    ConflictingFields(String),
}

struct ConstructorLabel<'a>(Option<&'a str>);

impl fmt::Display for ConstructorLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(tag) => write!(f, "constructor `{tag}`"),
            None => f.write_str("product constructor"),
        }
    }
}

impl Error {
    /// Create a type mismatch error for `found`
    pub fn type_mismatch(expected: JsonKind, found: &Value) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.clone(),
        }
    }

    /// Create a missing field error for `object`
    pub fn missing_field(field: impl Into<String>, object: &Value) -> Self {
        Error::MissingField {
            field: field.into(),
            object: object.clone(),
        }
    }

    /// Create an unknown tag error listing the accepted constructor names
    pub fn unknown_tag(tag: impl Into<String>, expected: &[&str]) -> Self {
        Error::UnknownTag {
            tag: tag.into(),
            expected: expected.join(", "),
        }
    }
}
