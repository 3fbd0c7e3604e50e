//! Converter values
//!
//! [`ToJson`] and [`FromJson`] are the per-type encode/decode behaviours,
//! represented as first-class values rather than trait impls. Combinators
//! take converters for component types and return converters for the
//! composite type, so nothing is resolved implicitly.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// Encoder from `T` to a JSON value
pub struct ToJson<T> {
    encode: Arc<dyn Fn(&T) -> Value + Send + Sync>,
}

impl<T> ToJson<T> {
    /// Wrap an encoding function
    pub fn new<F>(encode: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            encode: Arc::new(encode),
        }
    }

    /// Encode a value
    pub fn encode(&self, value: &T) -> Value {
        (self.encode)(value)
    }

    /// Encode a value and print it as compact JSON text
    pub fn encode_string(&self, value: &T) -> String {
        self.encode(value).to_string()
    }

    /// Build an encoder for `U` by first projecting it into `T`
    pub fn contramap<U, F>(self, project: F) -> ToJson<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(&U) -> T + Send + Sync + 'static,
    {
        ToJson::new(move |value: &U| self.encode(&project(value)))
    }
}

impl<T> Clone for ToJson<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
        }
    }
}

impl<T> fmt::Debug for ToJson<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToJson")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// Decoder from a JSON value to `T`
pub struct FromJson<T> {
    decode: Arc<dyn Fn(&Value) -> Result<T> + Send + Sync>,
}

impl<T> FromJson<T> {
    /// Wrap a decoding function
    pub fn new<F>(decode: F) -> Self
    where
        F: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            decode: Arc::new(decode),
        }
    }

    /// Decode a value
    pub fn decode(&self, json: &Value) -> Result<T> {
        (self.decode)(json)
    }

    /// Parse JSON text and decode the resulting value
    pub fn decode_str(&self, text: &str) -> Result<T> {
        let json: Value = serde_json::from_str(text)?;
        tracing::trace!(len = text.len(), "decoding parsed JSON text");
        self.decode(&json)
    }

    /// Transform every successfully decoded value
    pub fn map<U, F>(self, f: F) -> FromJson<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        FromJson::new(move |json: &Value| self.decode(json).map(&f))
    }

    /// Chain a fallible step after decoding
    pub fn and_then<U, F>(self, f: F) -> FromJson<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> Result<U> + Send + Sync + 'static,
    {
        FromJson::new(move |json: &Value| self.decode(json).and_then(&f))
    }
}

impl<T> Clone for FromJson<T> {
    fn clone(&self) -> Self {
        Self {
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for FromJson<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromJson")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
