//! Tag/contents JSON encoding for algebraic data types.
//!
//! Values are converted to and from [`serde_json::Value`] with converter
//! values ([`ToJson`], [`FromJson`]) that compose through the combinators in
//! this crate. Constructors use the tagged-object convention
//! `{"tag": "Name", "contents": ...}`; see [`codec`] for the exact shapes.

pub mod access;
pub mod codec;
pub mod combinators;
pub mod convert;
pub mod error;
pub mod options;
pub mod primitives;

pub use access::{get_tag, var_named};
pub use codec::{Constructor, decode_constructor, pack_contents, unpack_contents};
pub use combinators::{
    list_from_json, list_to_json, map_from_json, map_to_json, optional_from_json,
    optional_to_json, pair_from_json, pair_to_json,
};
pub use convert::{FromJson, ToJson};
pub use error::{Error, JsonKind, Result};
pub use options::SumEncoding;
pub use primitives::{
    bool_from_json, bool_to_json, float_from_json, float_to_json, int_from_json, int_to_json,
    string_from_json, string_to_json,
};
