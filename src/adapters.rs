//! Structural adapters: functions that derive a new codec from an existing one.
//!
//! Each adapter lifts a codec over one structural layer (a sequence, a
//! string-keyed dictionary, a nullable slot, a null-means-fallback slot) or,
//! for [`custom`], hands the two halves straight to the caller. Adapters nest
//! arbitrarily deep; every layer that descends into a child value prepends its
//! own [`LocationComponent`] to errors surfacing from below, so a failure
//! three levels down still reports a root-to-leaf path.
//!
//! Decoding is short-circuiting everywhere: the first failing element or
//! entry aborts the whole decode with no partial result.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::codec::{as_object, type_mismatch, Codec};
use crate::error::{DecodingError, LocationComponent};

/// Lifts a codec over `Option`, mapping JSON `null` to `None`.
///
/// Encode: `None` becomes JSON `null`, `Some(v)` delegates. Decode: JSON
/// `null` becomes `Ok(None)`, anything else delegates and wraps in `Some`.
pub fn nullable<T: 'static>(codec: Codec<T>) -> Codec<Option<T>> {
    let decode_codec = codec.clone();
    Codec::new(
        move |value: &Option<T>| match value {
            Some(inner) => codec.encode(inner),
            None => Value::Null,
        },
        move |value| match value {
            Value::Null => Ok(None),
            other => decode_codec.decode(other).map(Some),
        },
    )
}

/// Substitutes `fallback` for JSON `null` on decode.
///
/// Encoding always emits the real value; this adapter never writes `null`
/// itself. Decoding maps `null` to a clone of `fallback` and delegates
/// everything else, so the wrapped codec never sees a `null`.
pub fn with_default<T>(codec: Codec<T>, fallback: T) -> Codec<T>
where
    T: Clone + Send + Sync + 'static,
{
    let decode_codec = codec.clone();
    Codec::new(
        move |value: &T| codec.encode(value),
        move |value| match value {
            Value::Null => Ok(fallback.clone()),
            other => decode_codec.decode(other),
        },
    )
}

/// Lifts a codec over `Vec`, element by element.
///
/// Decode requires a JSON array and walks it in index order; the first
/// failing element aborts the decode with `[i]` prepended to its location.
pub fn array<T: 'static>(element: Codec<T>) -> Codec<Vec<T>> {
    let decode_element = element.clone();
    Codec::new(
        move |values: &Vec<T>| Value::Array(values.iter().map(|v| element.encode(v)).collect()),
        move |value| {
            let items = match value {
                Value::Array(items) => items,
                other => return Err(type_mismatch("array", other)),
            };
            let mut decoded = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let element = decode_element
                    .decode(item)
                    .map_err(|err| err.prepend_location(LocationComponent::Index(index)))?;
                decoded.push(element);
            }
            Ok(decoded)
        },
    )
}

/// Lifts a codec over a string-keyed map, entry by entry.
///
/// Keys pass through unchanged in both directions. Decode requires a JSON
/// object; the first failing entry aborts the decode with `"key"` prepended
/// to its location.
pub fn dict<T: 'static>(value_codec: Codec<T>) -> Codec<BTreeMap<String, T>> {
    let decode_value = value_codec.clone();
    Codec::new(
        move |entries: &BTreeMap<String, T>| {
            let mut object = Map::new();
            for (key, value) in entries {
                object.insert(key.clone(), value_codec.encode(value));
            }
            Value::Object(object)
        },
        move |value| {
            let object = as_object(value)?;
            let mut decoded = BTreeMap::new();
            for (key, entry) in object {
                let value = decode_value.decode(entry).map_err(|err| {
                    err.prepend_location(LocationComponent::Field(key.clone()))
                })?;
                decoded.insert(key.clone(), value);
            }
            Ok(decoded)
        },
    )
}

/// The unconditional escape hatch: a codec from two arbitrary functions.
///
/// Use this when no combination of the structural adapters expresses the
/// shape: scalar-or-array unions, stringly-typed timestamps, or value-level
/// validation the structural layer cannot see. Equivalent to [`Codec::new`].
pub fn custom<T>(
    encode: impl Fn(&T) -> Value + Send + Sync + 'static,
    decode: impl Fn(&Value) -> Result<T, DecodingError> + Send + Sync + 'static,
) -> Codec<T> {
    Codec::new(encode, decode)
}
