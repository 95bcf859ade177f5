//! The object composition engine.
//!
//! Everything here is one `macro_rules!` template, stamped out once per
//! arity: `objectN` takes N [`Field`] descriptors, a *destruct* function
//! that flattens a `&T` into an N-tuple, and a *construct* function that
//! builds a `T` back out of the tuple (and may fail, for cross-field
//! validation), yielding a single [`Codec<T>`] for the product type.
//!
//! ## Semantics, identical at every arity
//!
//! - **Encode** destructs the value, encodes each field in declared order
//!   into one entry map (optional-`None` fields omit their key, self fields
//!   splice their entries in) and wraps the map as a JSON object. Declared
//!   order determines key order and nothing else.
//! - **Decode** first requires the input to be a JSON object, then decodes
//!   the fields strictly left to right, short-circuiting on the first error.
//!   This is why declaration order decides *which* error surfaces when
//!   several fields are invalid. Only when all fields succeed is `construct`
//!   invoked; its result is returned unchanged.
//!
//! Decoding never partially applies effects: a failure hands back an error
//! value and nothing else.
//!
//! # Panics
//!
//! Encoding panics if a [`self_field`](crate::fields::self_field) slot's
//! codec produces anything but a JSON object. That signals an ill-formed
//! codec definition, not bad runtime data; see the field model docs.

use serde_json::{Map, Value};

use crate::codec::{as_object, Codec};
use crate::error::DecodingError;
use crate::fields::Field;

macro_rules! define_object_codec {
    ($(#[$meta:meta])* $name:ident => $(($T:ident, $field:ident, $idx:tt)),+ $(,)?) => {
        $(#[$meta])*
        pub fn $name<T, $($T),+>(
            $($field: Field<$T>,)+
            destruct: impl Fn(&T) -> ($($T,)+) + Send + Sync + 'static,
            construct: impl Fn(($($T,)+)) -> Result<T, DecodingError> + Send + Sync + 'static,
        ) -> Codec<T>
        where
            T: 'static,
            $($T: 'static,)+
        {
            let encode_fields = ($($field.clone(),)+);
            let decode_fields = ($($field,)+);
            Codec::new(
                move |value: &T| {
                    let ($($field,)+) = destruct(value);
                    let mut entries = Map::new();
                    $(encode_fields.$idx.encode_into(&$field, &mut entries);)+
                    Value::Object(entries)
                },
                move |value| {
                    let entries = as_object(value)?;
                    $(let $field = decode_fields.$idx.decode_from(entries)?;)+
                    construct(($($field,)+))
                },
            )
        }
    };
}

define_object_codec! {
    /// Codec for a single-field product type.
    ///
    /// Mostly used for newtype wrappers; note the one-tuple in both function
    /// signatures.
    object1 => (T1, field1, 0)
}

define_object_codec! {
    /// Codec for a two-field product type.
    ///
    /// ```
    /// use codecomb::{field, float, object2};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Point { x: f64, y: f64 }
    ///
    /// let codec = object2(
    ///     field("x", float()),
    ///     field("y", float()),
    ///     |p: &Point| (p.x, p.y),
    ///     |(x, y)| Ok(Point { x, y }),
    /// );
    ///
    /// assert_eq!(codec.encode_string(&Point { x: 1.0, y: 2.0 }), r#"{"x":1.0,"y":2.0}"#);
    /// assert_eq!(
    ///     codec.decode_string(r#"{"x":1,"y":2}"#),
    ///     Ok(Point { x: 1.0, y: 2.0 }),
    /// );
    /// ```
    object2 => (T1, field1, 0), (T2, field2, 1)
}

define_object_codec! {
    /// Codec for a three-field product type. See [`object2`] for the shape.
    object3 => (T1, field1, 0), (T2, field2, 1), (T3, field3, 2)
}

define_object_codec! {
    /// Codec for a 4-field product type. See [`object2`] for the shape.
    object4 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3)
}

define_object_codec! {
    /// Codec for a 5-field product type. See [`object2`] for the shape.
    object5 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4)
}

define_object_codec! {
    /// Codec for a 6-field product type. See [`object2`] for the shape.
    object6 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5)
}

define_object_codec! {
    /// Codec for a 7-field product type. See [`object2`] for the shape.
    object7 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6)
}

define_object_codec! {
    /// Codec for an 8-field product type. See [`object2`] for the shape.
    object8 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7)
}

define_object_codec! {
    /// Codec for a 9-field product type. See [`object2`] for the shape.
    object9 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8)
}

define_object_codec! {
    /// Codec for a 10-field product type. See [`object2`] for the shape.
    object10 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9)
}

define_object_codec! {
    /// Codec for an 11-field product type. See [`object2`] for the shape.
    object11 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10)
}

define_object_codec! {
    /// Codec for a 12-field product type. See [`object2`] for the shape.
    object12 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11)
}

define_object_codec! {
    /// Codec for a 13-field product type. See [`object2`] for the shape.
    object13 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12)
}

define_object_codec! {
    /// Codec for a 14-field product type. See [`object2`] for the shape.
    object14 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13)
}

define_object_codec! {
    /// Codec for a 15-field product type. See [`object2`] for the shape.
    object15 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14)
}

define_object_codec! {
    /// Codec for a 16-field product type. See [`object2`] for the shape.
    object16 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15)
}

define_object_codec! {
    /// Codec for a 17-field product type. See [`object2`] for the shape.
    object17 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16)
}

define_object_codec! {
    /// Codec for an 18-field product type. See [`object2`] for the shape.
    object18 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17)
}

define_object_codec! {
    /// Codec for a 19-field product type. See [`object2`] for the shape.
    object19 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17), (T19, field19, 18)
}

define_object_codec! {
    /// Codec for a 20-field product type. See [`object2`] for the shape.
    object20 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17), (T19, field19, 18), (T20, field20, 19)
}

define_object_codec! {
    /// Codec for a 21-field product type. See [`object2`] for the shape.
    object21 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17), (T19, field19, 18), (T20, field20, 19), (T21, field21, 20)
}

define_object_codec! {
    /// Codec for a 22-field product type. See [`object2`] for the shape.
    object22 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17), (T19, field19, 18), (T20, field20, 19), (T21, field21, 20), (T22, field22, 21)
}

define_object_codec! {
    /// Codec for a 23-field product type. See [`object2`] for the shape.
    object23 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17), (T19, field19, 18), (T20, field20, 19), (T21, field21, 20), (T22, field22, 21), (T23, field23, 22)
}

define_object_codec! {
    /// Codec for a 24-field product type. See [`object2`] for the shape.
    object24 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17), (T19, field19, 18), (T20, field20, 19), (T21, field21, 20), (T22, field22, 21), (T23, field23, 22), (T24, field24, 23)
}

define_object_codec! {
    /// Codec for a 25-field product type. See [`object2`] for the shape.
    object25 =>
        (T1, field1, 0), (T2, field2, 1), (T3, field3, 2), (T4, field4, 3), (T5, field5, 4), (T6, field6, 5), (T7, field7, 6), (T8, field8, 7), (T9, field9, 8), (T10, field10, 9), (T11, field11, 10), (T12, field12, 11), (T13, field13, 12), (T14, field14, 13), (T15, field15, 14), (T16, field16, 15), (T17, field17, 16), (T18, field18, 17), (T19, field19, 18), (T20, field20, 19), (T21, field21, 20), (T22, field22, 21), (T23, field23, 22), (T24, field24, 23), (T25, field25, 24)
}
