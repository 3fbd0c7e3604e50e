//! Converters for composite types built from their components' converters
//!
//! Maps are encoded as an array of `[key, value]` pairs rather than an
//! object, since keys need not encode to strings.

use serde_json::Value;
use tracing::debug;

use crate::convert::{FromJson, ToJson};
use crate::error::{Error, JsonKind, Result};

/// Encode a list element by element, preserving order
pub fn list_to_json<T: 'static>(elem: ToJson<T>) -> ToJson<Vec<T>> {
    ToJson::new(move |items: &Vec<T>| {
        Value::Array(items.iter().map(|item| elem.encode(item)).collect())
    })
}

/// Decode an array element by element, failing on the first bad element
pub fn list_from_json<T: 'static>(elem: FromJson<T>) -> FromJson<Vec<T>> {
    FromJson::new(move |json: &Value| match json {
        Value::Array(items) => items.iter().map(|item| elem.decode(item)).collect(),
        other => Err(Error::type_mismatch(JsonKind::Array, other)),
    })
}

/// Encode `None` as `null` and `Some(a)` as the encoding of `a`
///
/// A present value that itself encodes to `null` is indistinguishable from
/// `None` on the wire.
pub fn optional_to_json<T: 'static>(some: ToJson<T>) -> ToJson<Option<T>> {
    ToJson::new(move |value: &Option<T>| match value {
        Some(inner) => some.encode(inner),
        None => Value::Null,
    })
}

/// Decode `null` as `None` and anything else through `some`
pub fn optional_from_json<T: 'static>(some: FromJson<T>) -> FromJson<Option<T>> {
    FromJson::new(move |json: &Value| match json {
        Value::Null => Ok(None),
        other => some.decode(other).map(Some),
    })
}

/// Encode a 2-tuple as a two-element array
pub fn pair_to_json<A: 'static, B: 'static>(
    first: ToJson<A>,
    second: ToJson<B>,
) -> ToJson<(A, B)> {
    ToJson::new(move |(a, b): &(A, B)| {
        Value::Array(vec![first.encode(a), second.encode(b)])
    })
}

/// Decode a two-element array as a 2-tuple
pub fn pair_from_json<A: 'static, B: 'static>(
    first: FromJson<A>,
    second: FromJson<B>,
) -> FromJson<(A, B)> {
    FromJson::new(move |json: &Value| match json {
        Value::Array(items) => decode_pair(&first, &second, 0, json, items),
        other => Err(Error::type_mismatch(JsonKind::Array, other)),
    })
}

/// Encode a map as an array of `[key, value]` arrays in the map's iteration order
///
/// The target type is chosen by the caller, e.g. `ToJson<BTreeMap<K, V>>`.
pub fn map_to_json<M, K, V>(key: ToJson<K>, value: ToJson<V>) -> ToJson<M>
where
    M: 'static,
    K: 'static,
    V: 'static,
    for<'a> &'a M: IntoIterator<Item = (&'a K, &'a V)>,
{
    ToJson::new(move |map: &M| {
        Value::Array(
            map.into_iter()
                .map(|(k, v)| Value::Array(vec![key.encode(k), value.encode(v)]))
                .collect(),
        )
    })
}

/// Decode an array of `[key, value]` arrays into a map
///
/// Entries are inserted in array order, so a repeated key keeps its last value.
pub fn map_from_json<M, K, V>(key: FromJson<K>, value: FromJson<V>) -> FromJson<M>
where
    M: Default + Extend<(K, V)> + 'static,
    K: 'static,
    V: 'static,
{
    FromJson::new(move |json: &Value| {
        let Value::Array(entries) = json else {
            return Err(Error::type_mismatch(JsonKind::Array, json));
        };

        let mut map = M::default();
        for (index, entry) in entries.iter().enumerate() {
            let pair = match entry {
                Value::Array(items) => decode_pair(&key, &value, index, entry, items)?,
                _ => {
                    debug!(index, "map entry is not an array");
                    return Err(Error::MalformedPair {
                        index,
                        entry: entry.clone(),
                    });
                }
            };
            map.extend(Some(pair));
        }
        Ok(map)
    })
}

fn decode_pair<A, B>(
    first: &FromJson<A>,
    second: &FromJson<B>,
    index: usize,
    entry: &Value,
    items: &[Value],
) -> Result<(A, B)> {
    match items {
        [a, b] => Ok((first.decode(a)?, second.decode(b)?)),
        _ => {
            debug!(index, len = items.len(), "pair does not have two elements");
            Err(Error::MalformedPair {
                index,
                entry: entry.clone(),
            })
        }
    }
}
