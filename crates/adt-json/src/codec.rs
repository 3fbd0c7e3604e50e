//! Tag/contents codec for constructors
//!
//! A constructor is encoded from its name, its already-encoded arguments and
//! the number of constructors its type declares. The wire shape depends on
//! the argument count:
//!
//! - one argument, any type: `{"tag": "Name", "contents": arg}`
//! - product type (`num_ctors == 0`), zero or many arguments: `[arg, ...]`
//! - otherwise: `{"tag": "Name", "contents": [arg, ...]}`
//!
//! Decoding additionally accepts a bare `"Name"` string as a constructor
//! without arguments.
//!
//! A single argument that is itself an array is indistinguishable on the wire
//! from several arguments, so it decodes as the array's elements.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, JsonKind, Result};
use crate::options::{DEFAULT_ENCODING, SumEncoding};

/// A decoded constructor: its tag and its still-encoded arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    /// Constructor name, `None` for product types encoded without a tag
    pub tag: Option<String>,
    /// Encoded arguments in declaration order
    pub args: Vec<Value>,
}

impl Constructor {
    /// The constructor name, if the encoding carried one
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Take the arguments, requiring exactly `expected` of them
    pub fn expect_arity(self, expected: usize) -> Result<Vec<Value>> {
        if self.args.len() == expected {
            Ok(self.args)
        } else {
            Err(Error::WrongArity {
                tag: self.tag,
                expected,
                found: self.args.len(),
            })
        }
    }

    /// Take exactly `N` arguments as an array, for destructuring
    pub fn expect_args<const N: usize>(self) -> Result<[Value; N]> {
        let tag = self.tag.clone();
        let args = self.expect_arity(N)?;
        <[Value; N]>::try_from(args).map_err(|args| Error::WrongArity {
            tag,
            expected: N,
            found: args.len(),
        })
    }
}

impl SumEncoding {
    /// Encode a constructor name and its encoded arguments
    ///
    /// `name` should be non-empty. This never fails.
    pub fn pack(&self, num_ctors: usize, name: &str, contents: Vec<Value>) -> Value {
        let contents = match <[Value; 1]>::try_from(contents) {
            Ok([arg]) => return self.tagged(name, arg),
            Err(contents) => contents,
        };

        if num_ctors == 0 {
            return Value::Array(contents);
        }

        if contents.is_empty() && self.nullary_to_string_tag {
            return Value::String(name.to_string());
        }

        self.tagged(name, Value::Array(contents))
    }

    /// Decode the encoded arguments of a constructor
    pub fn unpack(&self, num_ctors: usize, json: &Value) -> Result<Vec<Value>> {
        match json {
            Value::Array(items) if num_ctors == 0 => Ok(items.clone()),
            Value::String(_) => Ok(Vec::new()),
            Value::Object(fields) => match fields.get(&self.contents_field) {
                Some(Value::Array(items)) => Ok(items.clone()),
                Some(other) => Ok(vec![other.clone()]),
                None => {
                    debug!(field = %self.contents_field, "constructor object has no contents");
                    Err(Error::missing_field(&self.contents_field, json))
                }
            },
            _ => {
                debug!(num_ctors, kind = %JsonKind::of(json), "unsupported contents shape");
                Err(Error::UnsupportedShape {
                    num_ctors,
                    value: json.clone(),
                })
            }
        }
    }

    /// Decode a constructor's tag and arguments in one step
    ///
    /// Product types (`num_ctors == 0`) encoded as a bare array have no tag.
    pub fn decode_constructor(&self, num_ctors: usize, json: &Value) -> Result<Constructor> {
        if let (0, Value::Array(items)) = (num_ctors, json) {
            return Ok(Constructor {
                tag: None,
                args: items.clone(),
            });
        }

        let args = self.unpack(num_ctors, json)?;
        let tag = self.tag_of(json)?.to_string();
        Ok(Constructor {
            tag: Some(tag),
            args,
        })
    }

    fn tagged(&self, name: &str, contents: Value) -> Value {
        let mut object = Map::with_capacity(2);
        object.insert(self.tag_field.clone(), Value::String(name.to_string()));
        object.insert(self.contents_field.clone(), contents);
        Value::Object(object)
    }
}

/// Encode a constructor with the default `tag`/`contents` field names
pub fn pack_contents(num_ctors: usize, name: &str, contents: Vec<Value>) -> Value {
    DEFAULT_ENCODING.pack(num_ctors, name, contents)
}

/// Decode constructor arguments encoded by [`pack_contents`]
pub fn unpack_contents(num_ctors: usize, json: &Value) -> Result<Vec<Value>> {
    DEFAULT_ENCODING.unpack(num_ctors, json)
}

/// Decode a constructor encoded by [`pack_contents`]
pub fn decode_constructor(num_ctors: usize, json: &Value) -> Result<Constructor> {
    DEFAULT_ENCODING.decode_constructor(num_ctors, json)
}
