//! The core codec abstraction and the built-in scalar codecs.
//!
//! A [`Codec<T>`] is an immutable pair of pure functions: one that turns a
//! `&T` into a [`serde_json::Value`], and one that turns a `&Value` back into
//! a `T` or a [`DecodingError`]. Codecs hold no mutable state: once built
//! (typically at program start, or lazily on first use) a codec can be cloned
//! cheaply, shared across threads and invoked concurrently without any
//! synchronization.
//!
//! The scalar codecs at the bottom of this module are the leaves every
//! composition ultimately rests on. Everything else in the crate (adapters,
//! fields, the object engine) only ever *wraps* codecs into bigger codecs.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{DecodingError, Location};

/// An encode/decode function pair for one type.
///
/// Both halves are trait objects behind `Arc`, so `Codec<T>` is `Clone`
/// regardless of `T` and `Send + Sync` whenever the captured state is.
/// Equality of codecs is intentionally not defined; two codecs are
/// interchangeable exactly when they behave identically.
pub struct Codec<T> {
    encode: Arc<dyn Fn(&T) -> Value + Send + Sync>,
    decode: Arc<dyn Fn(&Value) -> Result<T, DecodingError> + Send + Sync>,
}

// Manual impl: #[derive(Clone)] would demand T: Clone, which the Arcs don't need.
impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> std::fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}

impl<T> Codec<T> {
    /// Builds a codec from an encode function and a decode function.
    ///
    /// No validation is performed; the caller is trusted to keep the pair
    /// symmetric wherever the schema allows. This is the primitive every
    /// other constructor in the crate bottoms out in; user code normally
    /// reaches for [`custom`](crate::adapters::custom) instead.
    pub fn new(
        encode: impl Fn(&T) -> Value + Send + Sync + 'static,
        decode: impl Fn(&Value) -> Result<T, DecodingError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    /// Encodes `value` into a JSON value.
    ///
    /// Encoding is total: given a well-formed codec it cannot fail.
    pub fn encode(&self, value: &T) -> Value {
        (self.encode)(value)
    }

    /// Decodes a JSON value.
    ///
    /// All data-shape problems come back as `Err`; this never panics on bad
    /// input.
    pub fn decode(&self, value: &Value) -> Result<T, DecodingError> {
        (self.decode)(value)
    }
}

/// Error for a value of the wrong JSON kind, located at the decode root.
///
/// Outer layers add the real position via `prepend_location` as the error
/// bubbles out.
pub(crate) fn type_mismatch(expected: &'static str, actual: &Value) -> DecodingError {
    DecodingError::UnexpectedJsonType {
        location: Location::root(),
        expected,
        actual: actual.clone(),
    }
}

/// The identity codec: passes JSON values through untouched.
///
/// Useful as a passthrough when part of a document should stay generic, and
/// as the default codec of a [`self_field`](crate::fields::self_field).
pub fn json() -> Codec<Value> {
    Codec::new(Clone::clone, |value| Ok(value.clone()))
}

/// Codec for strings.
pub fn string() -> Codec<String> {
    Codec::new(
        |value: &String| Value::String(value.clone()),
        |value| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(type_mismatch("string", other)),
        },
    )
}

/// Codec for 64-bit floats. Decodes any JSON number.
pub fn float() -> Codec<f64> {
    Codec::new(
        |value: &f64| Value::from(*value),
        |value| match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| DecodingError::UnexpectedJsonValue {
                location: Location::root(),
                repr: n.to_string(),
            }),
            other => Err(type_mismatch("number", other)),
        },
    )
}

/// Codec for booleans.
pub fn boolean() -> Codec<bool> {
    Codec::new(
        |value: &bool| Value::Bool(*value),
        |value| match value {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch("boolean", other)),
        },
    )
}

/// Codec for 32-bit integers.
///
/// JSON has no integer type, only numbers, so encoding always succeeds but
/// decoding is strict: the number must have a zero fractional part *and* fit
/// in `[-2147483648, 2147483647]`. Anything else fails with
/// [`DecodingError::UnexpectedJsonValue`] carrying the number's decimal
/// rendering: `42.0` decodes to `Ok(42)`, `42.5` and `9111222333` do not.
pub fn int() -> Codec<i32> {
    Codec::new(
        |value: &i32| Value::from(*value),
        |value| {
            let n = match value {
                Value::Number(n) => n,
                other => return Err(type_mismatch("number", other)),
            };
            let out_of_domain = || DecodingError::UnexpectedJsonValue {
                location: Location::root(),
                repr: n.to_string(),
            };
            // serde_json keeps integer-backed and float-backed numbers
            // distinct; `42.0` parsed from text only answers as_f64().
            if let Some(i) = n.as_i64() {
                return i32::try_from(i).map_err(|_| out_of_domain());
            }
            if let Some(u) = n.as_u64() {
                return i32::try_from(u).map_err(|_| out_of_domain());
            }
            match n.as_f64() {
                Some(f)
                    if f.fract() == 0.0
                        && f >= f64::from(i32::MIN)
                        && f <= f64::from(i32::MAX) =>
                {
                    Ok(f as i32)
                }
                _ => Err(out_of_domain()),
            }
        },
    )
}

/// Shortcut for rejecting anything that is not a JSON object.
pub(crate) fn as_object(value: &Value) -> Result<&serde_json::Map<String, Value>, DecodingError> {
    match value {
        Value::Object(entries) => Ok(entries),
        other => Err(type_mismatch("object", other)),
    }
}
