#![allow(missing_docs)]

use std::collections::BTreeMap;

use codecomb::{
    array, custom, dict, int, nullable, string, with_default, DecodingError, Location,
    LocationComponent,
};
use serde_json::{json, Value};

fn at(components: Vec<LocationComponent>) -> Location {
    let mut location = Location::root();
    for component in components.into_iter().rev() {
        location.prepend(component);
    }
    location
}

// --- TESTS ---

/// `array` round-trips element-wise and keeps index order.
#[test]
fn test_array_round_trip() -> Result<(), DecodingError> {
    let codec = array(int());
    let encoded = codec.encode(&vec![1, 2, 3]);
    assert_eq!(encoded, json!([1, 2, 3]));
    assert_eq!(codec.decode(&encoded)?, vec![1, 2, 3]);
    assert_eq!(codec.decode(&json!([]))?, Vec::<i32>::new());
    Ok(())
}

/// Element failure aborts the decode and reports the failing index.
/// Validate `[1, 2, "three", 4]` against `array(int)`.
#[test]
fn test_array_failure_carries_index() {
    let codec = array(int());
    assert_eq!(
        codec.decode(&json!([1, 2, "three", 4])),
        Err(DecodingError::UnexpectedJsonType {
            location: at(vec![LocationComponent::Index(2)]),
            expected: "number",
            actual: json!("three"),
        })
    );
}

/// Non-arrays are a type mismatch, not an element error.
#[test]
fn test_array_requires_array() {
    assert_eq!(
        array(int()).decode(&json!({"0": 1})),
        Err(DecodingError::UnexpectedJsonType {
            location: Location::root(),
            expected: "array",
            actual: json!({"0": 1}),
        })
    );
}

/// `dict` maps entry values and passes keys through unchanged.
#[test]
fn test_dict_round_trip() -> Result<(), DecodingError> {
    let codec = dict(int());
    let mut counts = BTreeMap::new();
    counts.insert("a".to_string(), 1);
    counts.insert("b".to_string(), 2);

    let encoded = codec.encode(&counts);
    assert_eq!(encoded, json!({"a": 1, "b": 2}));
    assert_eq!(codec.decode(&encoded)?, counts);
    Ok(())
}

/// Entry failure reports the failing key.
#[test]
fn test_dict_failure_carries_key() {
    let codec = dict(int());
    assert_eq!(
        codec.decode(&json!({"a": 1, "b": true})),
        Err(DecodingError::UnexpectedJsonType {
            location: at(vec![LocationComponent::Field("b".to_string())]),
            expected: "number",
            actual: json!(true),
        })
    );
}

/// `nullable` maps `null` to `None` in both directions.
#[test]
fn test_nullable() -> Result<(), DecodingError> {
    let codec = nullable(string());
    assert_eq!(codec.encode(&None), Value::Null);
    assert_eq!(codec.encode(&Some("x".to_string())), json!("x"));
    assert_eq!(codec.decode(&Value::Null)?, None);
    assert_eq!(codec.decode(&json!("x"))?, Some("x".to_string()));
    Ok(())
}

/// A nullable mismatch still reports the inner codec's expectation.
#[test]
fn test_nullable_delegates_mismatch() {
    assert_eq!(
        nullable(string()).decode(&json!(5)),
        Err(DecodingError::UnexpectedJsonType {
            location: Location::root(),
            expected: "string",
            actual: json!(5),
        })
    );
}

/// `with_default` substitutes the fallback for `null` on decode only;
/// encoding always writes the real value.
#[test]
fn test_with_default() -> Result<(), DecodingError> {
    let codec = with_default(int(), 5);
    assert_eq!(codec.decode(&Value::Null)?, 5);
    assert_eq!(codec.decode(&json!(9))?, 9);
    assert_eq!(codec.encode(&5), json!(5));
    Ok(())
}

/// Adapters nest: failures deep inside compose their locations root-to-leaf.
#[test]
fn test_nested_adapter_locations() {
    let codec = dict(array(int()));
    assert_eq!(
        codec.decode(&json!({"rows": [1, null]})),
        Err(DecodingError::UnexpectedJsonType {
            location: at(vec![
                LocationComponent::Field("rows".to_string()),
                LocationComponent::Index(1),
            ]),
            expected: "number",
            actual: Value::Null,
        })
    );
}

/// `custom` expresses shapes the structural adapters cannot: here a
/// scalar-or-array union normalized to a vector.
#[test]
fn test_custom_scalar_or_array() -> Result<(), DecodingError> {
    let codec = custom(
        |values: &Vec<i32>| match values.as_slice() {
            [single] => json!(single),
            many => json!(many),
        },
        |value| match value {
            Value::Array(_) => array(int()).decode(value),
            _ => int().decode(value).map(|single| vec![single]),
        },
    );

    assert_eq!(codec.encode(&vec![7]), json!(7));
    assert_eq!(codec.encode(&vec![1, 2]), json!([1, 2]));
    assert_eq!(codec.decode(&json!(7))?, vec![7]);
    assert_eq!(codec.decode(&json!([1, 2]))?, vec![1, 2]);
    Ok(())
}
