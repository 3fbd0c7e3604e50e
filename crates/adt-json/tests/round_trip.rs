//! Property tests for the codec and combinator round trips

use adt_json::{
    FromJson, SumEncoding, ToJson, get_tag, int_from_json, int_to_json, list_from_json,
    list_to_json, map_from_json, map_to_json, optional_from_json, optional_to_json,
    pack_contents, string_from_json, string_to_json, unpack_contents,
};
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// Encoded arguments that are not themselves arrays
fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::String),
        ("[a-z]{1,6}", any::<i32>()).prop_map(|(k, v)| {
            let mut object = Map::new();
            object.insert(k, Value::from(v));
            Value::Object(object)
        }),
    ]
}

fn ctor_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z]{0,10}"
}

proptest! {
    /// Unpacking recovers exactly the packed arguments for every shape branch.
    #[test]
    fn unpack_inverts_pack(
        num_ctors in 0usize..6,
        name in ctor_name(),
        args in prop::collection::vec(leaf(), 0..5),
    ) {
        let json = pack_contents(num_ctors, &name, args.clone());
        prop_assert_eq!(unpack_contents(num_ctors, &json).unwrap(), args);
    }

    /// The string-tag option keeps the round trip intact.
    #[test]
    fn unpack_inverts_pack_with_string_tags(
        num_ctors in 0usize..6,
        name in ctor_name(),
        args in prop::collection::vec(leaf(), 0..5),
    ) {
        let options = SumEncoding::default().with_nullary_to_string_tag(true);
        let json = options.pack(num_ctors, &name, args.clone());
        prop_assert_eq!(options.unpack(num_ctors, &json).unwrap(), args);
    }

    /// Sum types always carry a recoverable tag.
    #[test]
    fn tag_is_recoverable(
        num_ctors in 1usize..6,
        name in ctor_name(),
        args in prop::collection::vec(leaf(), 0..5),
    ) {
        let json = pack_contents(num_ctors, &name, args);
        prop_assert_eq!(get_tag(&json).unwrap(), name.as_str());
    }

    #[test]
    fn int_list_round_trip(xs in prop::collection::vec(any::<i64>(), 0..32)) {
        let to = list_to_json(int_to_json());
        let from = list_from_json(int_from_json());
        prop_assert_eq!(from.decode(&to.encode(&xs)).unwrap(), xs);
    }

    #[test]
    fn optional_present_round_trip(s in ".{0,16}") {
        let to = optional_to_json(string_to_json());
        let from = optional_from_json(string_from_json());
        prop_assert_eq!(from.decode(&to.encode(&Some(s.clone()))).unwrap(), Some(s));
    }

    #[test]
    fn map_round_trip(map in prop::collection::btree_map(any::<i64>(), "[a-z]{0,8}", 0..16)) {
        let to: ToJson<BTreeMap<i64, String>> = map_to_json(int_to_json(), string_to_json());
        let from: FromJson<BTreeMap<i64, String>> =
            map_from_json(int_from_json(), string_from_json());
        prop_assert_eq!(from.decode(&to.encode(&map)).unwrap(), map);
    }

    /// Decoding never panics on arbitrary JSON text.
    #[test]
    fn decode_str_does_not_panic(text in ".{0,64}") {
        let from = list_from_json(int_from_json());
        let _ = from.decode_str(&text);
        let _ = unpack_contents(2, &Value::String(text));
    }
}

#[test]
fn optional_collapses_values_encoding_to_null() {
    let null_to = ToJson::new(|_: &()| Value::Null);
    assert_eq!(optional_to_json(null_to.clone()).encode(&Some(())), Value::Null);
    assert_eq!(optional_to_json(null_to).encode(&None), Value::Null);
    assert_eq!(optional_to_json(string_to_json()).encode(&None), Value::Null);
}

#[test]
fn map_decode_with_duplicate_keys_keeps_last() {
    let to: ToJson<BTreeMap<i64, String>> = map_to_json(int_to_json(), string_to_json());
    let from: FromJson<BTreeMap<i64, String>> =
        map_from_json(int_from_json(), string_from_json());

    let original = BTreeMap::from([(1, "a".to_string()), (2, "b".to_string())]);
    assert_eq!(to.encode(&original), json!([[1, "a"], [2, "b"]]));

    let decoded = from.decode(&json!([[1, "a"], [1, "c"], [2, "b"]])).unwrap();
    assert_eq!(decoded, BTreeMap::from([(1, "c".to_string()), (2, "b".to_string())]));
}

#[test]
fn map_decode_into_insertion_ordered_map() {
    let from: FromJson<indexmap::IndexMap<String, i64>> =
        map_from_json(string_from_json(), int_from_json());
    let map = from.decode(&json!([["z", 1], ["a", 2], ["z", 3]])).unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
    assert_eq!(map["z"], 3);

    let to: ToJson<indexmap::IndexMap<String, i64>> =
        map_to_json(string_to_json(), int_to_json());
    assert_eq!(to.encode(&map), json!([["z", 3], ["a", 2]]));
}
