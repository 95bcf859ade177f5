//! The field model: a codec bound to a placement and a presence claim.
//!
//! A [`Field<T>`] describes how one slot of a product type lives inside the
//! enclosing JSON object. The *placement* says where: under a named key, or
//! spliced into the whole object ([`self_field`], for tagged unions whose
//! payload shares the discriminant's key space). The *claim* says what
//! happens when the key is absent or `null`:
//!
//! | claim         | encode                         | decode, key absent        |
//! |---------------|--------------------------------|---------------------------|
//! | `Required`    | always writes the key          | `MissingField`            |
//! | `Optional`    | omits the key when `null`      | `Ok(None)`                |
//! | `DefaultedTo` | always writes the real value   | `Ok(fallback)`, codec not invoked |
//!
//! `Optional` and `DefaultedTo` are not separate codepaths bolted onto the
//! engine: they are derived by rewriting the field's inner codec through
//! [`nullable`] or [`with_default`] and recording the claim, so the object
//! engine treats every field identically.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::adapters::{nullable, with_default};
use crate::codec::{json, Codec};
use crate::error::{json_kind, DecodingError, Location, LocationComponent};

/// Where a field lives in the enclosing JSON object.
#[derive(Debug, Clone)]
enum Placement {
    /// Exactly one entry under this key.
    Key(String),
    /// Spliced into the enclosing object itself.
    SelfObject,
}

/// What an absent or `null` value means for a field.
enum Claim<T> {
    /// The key must be present.
    Required,
    /// Absent or `null` decodes to `None`; `None` encodes to no key at all.
    Optional,
    /// Absent or `null` decodes to the fallback, produced on demand so that
    /// `Clone` bounds stay confined to [`defaulted`].
    DefaultedTo(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Clone for Claim<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Required => Self::Required,
            Self::Optional => Self::Optional,
            Self::DefaultedTo(producer) => Self::DefaultedTo(Arc::clone(producer)),
        }
    }
}

/// A codec bound to a placement and a presence claim.
///
/// Built by [`field`] or [`self_field`] and refined by [`optional`] or
/// [`defaulted`]; consumed by the `objectN` composition functions. Cheap to
/// clone (the codec halves are shared behind `Arc`).
pub struct Field<T> {
    placement: Placement,
    codec: Codec<T>,
    claim: Claim<T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            placement: self.placement.clone(),
            codec: self.codec.clone(),
            claim: self.claim.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

/// A required field stored under `key`.
pub fn field<T>(key: impl Into<String>, codec: Codec<T>) -> Field<T> {
    Field {
        placement: Placement::Key(key.into()),
        codec,
        claim: Claim::Required,
    }
}

/// A field whose codec is applied to the *entire* enclosing object.
///
/// This is the flattening primitive for tagged unions: the payload codec
/// reads and writes the same JSON object that carries the discriminant key,
/// so the two appear as siblings. The codec of a self field must always
/// encode to a JSON object; that is a static contract of the codec
/// definition, not a property of runtime data (see the panic note on the
/// object composition functions).
pub fn self_field() -> Field<Value> {
    Field {
        placement: Placement::SelfObject,
        codec: json(),
        claim: Claim::Required,
    }
}

/// Makes a field optional: absent key or `null` decodes to `None`, and a
/// `None` value encodes to no key at all.
///
/// The inner codec is rewritten through [`nullable`], so the payload type
/// becomes `Option<T>`.
pub fn optional<T: 'static>(field: Field<T>) -> Field<Option<T>> {
    Field {
        placement: field.placement,
        codec: nullable(field.codec),
        claim: Claim::Optional,
    }
}

/// Gives a field a fallback: absent key or `null` decodes to `fallback`,
/// while encoding always writes the real value (even when it equals the
/// fallback).
///
/// The inner codec is rewritten through [`with_default`].
pub fn defaulted<T>(field: Field<T>, fallback: T) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
{
    let producer = fallback.clone();
    Field {
        placement: field.placement,
        codec: with_default(field.codec, fallback),
        claim: Claim::DefaultedTo(Arc::new(move || producer.clone())),
    }
}

impl<T> Field<T> {
    /// Encodes `value` into the enclosing object's entry map.
    ///
    /// A `Key` placement contributes at most one entry (none when an
    /// `Optional` claim encodes to `null`). A `SelfObject` placement splices
    /// the entries of the encoded object directly into `entries`.
    ///
    /// # Panics
    ///
    /// If a `SelfObject` field's codec encodes to anything but a JSON
    /// object. This is a contract violation in the codec definition,
    /// detectable by review or a single test, and aborts rather than
    /// surfacing as a recoverable error.
    pub(crate) fn encode_into(&self, value: &T, entries: &mut Map<String, Value>) {
        let json = self.codec.encode(value);
        match &self.placement {
            Placement::Key(key) => {
                if matches!(self.claim, Claim::Optional) && json.is_null() {
                    return;
                }
                entries.insert(key.clone(), json);
            }
            Placement::SelfObject => match json {
                Value::Object(spliced) => entries.extend(spliced),
                other => {
                    // Ill-formed codec definition, not bad runtime data.
                    #[allow(clippy::panic)]
                    {
                        panic!(
                            "a self field must encode to a JSON object, got {}",
                            json_kind(&other)
                        );
                    }
                }
            },
        }
    }

    /// Decodes this field out of the enclosing object's entry map.
    ///
    /// Present keys decode through the codec with `"key"` prepended to any
    /// error location. Absent keys resolve per the claim: `Optional` decodes
    /// as if the value were `null`, `DefaultedTo` short-circuits to the
    /// fallback without touching the codec, `Required` is a `MissingField`.
    pub(crate) fn decode_from(&self, entries: &Map<String, Value>) -> Result<T, DecodingError> {
        match &self.placement {
            Placement::SelfObject => {
                // Re-wrap so the payload codec sees the same object that
                // carries its sibling keys.
                self.codec.decode(&Value::Object(entries.clone()))
            }
            Placement::Key(key) => match entries.get(key) {
                Some(value) => self.codec.decode(value).map_err(|err| {
                    err.prepend_location(LocationComponent::Field(key.clone()))
                }),
                None => match &self.claim {
                    Claim::Optional => self.codec.decode(&Value::Null),
                    Claim::DefaultedTo(producer) => Ok(producer()),
                    Claim::Required => Err(DecodingError::MissingField {
                        location: Location::root(),
                        key: key.clone(),
                    }),
                },
            },
        }
    }
}
