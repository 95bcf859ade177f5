#![allow(missing_docs)]

use codecomb::{
    boolean, custom, defaulted, field, float, int, object2, object5, optional, string, Codec,
    DecodingError, Location, LocationComponent,
};
use serde_json::json;

#[derive(Debug, PartialEq, Clone)]
struct Point {
    x: f64,
    y: f64,
}

fn point_codec() -> Codec<Point> {
    object2(
        field("x", float()),
        field("y", float()),
        |p: &Point| (p.x, p.y),
        |(x, y)| Ok(Point { x, y }),
    )
}

/// A codec that fails every decode; used to prove a defaulted field never
/// invokes it for an absent key.
fn poisoned_int() -> Codec<i32> {
    custom(
        |value: &i32| json!(value),
        |value| {
            Err(DecodingError::UnexpectedJsonValue {
                location: Location::root(),
                repr: value.to_string(),
            })
        },
    )
}

// --- TESTS ---

/// A two-float point survives the full text round trip.
#[test]
fn test_point_round_trip() -> Result<(), DecodingError> {
    let codec = point_codec();
    let point = Point { x: 1.0, y: 2.0 };

    assert_eq!(codec.encode_string(&point), r#"{"x":1.0,"y":2.0}"#);
    assert_eq!(codec.decode_string(r#"{"x":1,"y":2}"#)?, point);
    Ok(())
}

/// A missing required key fails with `MissingField` at the object itself.
#[test]
fn test_missing_required_field() {
    assert_eq!(
        point_codec().decode_string(r#"{"x":1}"#),
        Err(DecodingError::MissingField {
            location: Location::root(),
            key: "y".to_string(),
        })
    );
}

/// Decoding anything but a JSON object is a type mismatch.
#[test]
fn test_object_requires_object() {
    assert_eq!(
        point_codec().decode(&json!([1, 2])),
        Err(DecodingError::UnexpectedJsonType {
            location: Location::root(),
            expected: "object",
            actual: json!([1, 2]),
        })
    );
}

/// Fields decode in declared order, so when several are invalid the first
/// declared one decides which error surfaces.
#[test]
fn test_first_declared_error_wins() {
    let err = point_codec()
        .decode(&json!({"x": "one", "y": "two"}))
        .unwrap_err();
    assert_eq!(
        err,
        DecodingError::UnexpectedJsonType {
            location: {
                let mut location = Location::root();
                location.prepend(LocationComponent::Field("x".to_string()));
                location
            },
            expected: "number",
            actual: json!("one"),
        }
    );
}

/// Declared field order determines key order in the encoded object.
#[test]
fn test_encode_preserves_declared_order() {
    let json_text = point_codec().encode_string(&Point { x: 9.0, y: 8.0 });
    assert!(json_text.find("\"x\"") < json_text.find("\"y\""));
}

/// `construct` may fail for cross-field reasons; its error passes through
/// unchanged.
#[test]
fn test_construct_failure_passes_through() {
    let codec = object2(
        field("min", int()),
        field("max", int()),
        |range: &(i32, i32)| (range.0, range.1),
        |(min, max)| {
            if min <= max {
                Ok((min, max))
            } else {
                Err(DecodingError::UnexpectedJsonValue {
                    location: Location::root(),
                    repr: format!("{min} > {max}"),
                })
            }
        },
    );

    assert_eq!(codec.decode(&json!({"min": 1, "max": 3})), Ok((1, 3)));
    assert_eq!(
        codec.decode(&json!({"min": 3, "max": 1})),
        Err(DecodingError::UnexpectedJsonValue {
            location: Location::root(),
            repr: "3 > 1".to_string(),
        })
    );
}

/// Optional fields: `None` omits the key on encode; a missing key and an
/// explicit `null` both decode to `None`.
#[test]
fn test_optional_omission() -> Result<(), DecodingError> {
    let codec = object2(
        field("name", string()),
        optional(field("nickname", string())),
        |p: &(String, Option<String>)| p.clone(),
        Ok,
    );

    let anonymous = ("Ada".to_string(), None);
    assert_eq!(codec.encode_string(&anonymous), r#"{"name":"Ada"}"#);
    assert_eq!(codec.decode_string(r#"{"name":"Ada"}"#)?, anonymous);
    assert_eq!(
        codec.decode_string(r#"{"name":"Ada","nickname":null}"#)?,
        anonymous
    );

    let nicknamed = ("Ada".to_string(), Some("Countess".to_string()));
    assert_eq!(codec.decode(&codec.encode(&nicknamed))?, nicknamed);
    Ok(())
}

/// Defaulted fields always write the key, even when the value equals the
/// fallback, and decode a missing key or `null` to the fallback.
#[test]
fn test_defaulted_always_emitted() -> Result<(), DecodingError> {
    let codec = object2(
        field("name", string()),
        defaulted(field("retries", int()), 3),
        |cfg: &(String, i32)| cfg.clone(),
        Ok,
    );

    assert_eq!(
        codec.encode_string(&("job".to_string(), 3)),
        r#"{"name":"job","retries":3}"#
    );
    assert_eq!(codec.decode_string(r#"{"name":"job"}"#)?, ("job".to_string(), 3));
    assert_eq!(
        codec.decode_string(r#"{"name":"job","retries":null}"#)?,
        ("job".to_string(), 3)
    );
    assert_eq!(
        codec.decode_string(r#"{"name":"job","retries":7}"#)?,
        ("job".to_string(), 7)
    );
    Ok(())
}

/// An absent defaulted key short-circuits to the fallback without invoking
/// the wrapped codec at all.
#[test]
fn test_defaulted_skips_codec_when_absent() -> Result<(), DecodingError> {
    let codec = object2(
        field("name", string()),
        defaulted(field("retries", poisoned_int()), 3),
        |cfg: &(String, i32)| cfg.clone(),
        Ok,
    );

    // Absent: the poisoned codec is never consulted.
    assert_eq!(codec.decode_string(r#"{"name":"job"}"#)?, ("job".to_string(), 3));

    // Present: it is, and its failure surfaces under the key.
    let err = codec
        .decode_string(r#"{"name":"job","retries":7}"#)
        .unwrap_err();
    assert!(matches!(err, DecodingError::UnexpectedJsonValue { .. }));
    Ok(())
}

/// Larger arities share the exact same semantics; spot-check a five-field
/// composition.
#[test]
fn test_object5_round_trip() -> Result<(), DecodingError> {
    #[derive(Debug, PartialEq, Clone)]
    struct Job {
        name: String,
        priority: i32,
        weight: f64,
        urgent: bool,
        tags: Option<String>,
    }

    let codec = object5(
        field("name", string()),
        field("priority", int()),
        field("weight", float()),
        field("urgent", boolean()),
        optional(field("tags", string())),
        |j: &Job| {
            (
                j.name.clone(),
                j.priority,
                j.weight,
                j.urgent,
                j.tags.clone(),
            )
        },
        |(name, priority, weight, urgent, tags)| {
            Ok(Job {
                name,
                priority,
                weight,
                urgent,
                tags,
            })
        },
    );

    let job = Job {
        name: "compact".to_string(),
        priority: 2,
        weight: 0.5,
        urgent: false,
        tags: None,
    };
    assert_eq!(codec.decode(&codec.encode(&job))?, job);

    // The fourth slot failing proves left-to-right order holds at this
    // arity too: the earlier three decode fine and the walk stops there.
    let err = codec
        .decode(&json!({
            "name": "compact", "priority": 2, "weight": 0.5, "urgent": "no"
        }))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Expected boolean, got string at ."urgent""#
    );
    Ok(())
}
