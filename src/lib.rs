//! # Codecomb
//!
//! Composable, location-aware JSON codecs for Rust: build an encode/decode
//! pair for your type out of small, reusable pieces. No reflection, no
//! derive macros, no schema files.
//!
//! ## Overview
//!
//! Codecomb takes a different position from serde-style data mapping. Instead
//! of deriving one canonical mapping per type, you *declare* a [`Codec`] (an
//! immutable pair of pure functions between your type and the generic
//! [`serde_json::Value`] model) by composing smaller codecs. The composition
//! is total (every field of the product type is covered by construction),
//! decoding failures come back as values with a precise root-to-leaf
//! location, and encode/decode stay symmetric wherever the schema allows.
//!
//! ### Key Features
//!
//! *   **No reflection:** a codec is ordinary data built from ordinary
//!     functions. The same type can have several codecs for several wire
//!     shapes.
//! *   **Location-aware errors:** every decode failure is a closed
//!     [`DecodingError`] value carrying the path to the failing spot, and
//!     renders as a single-line diagnostic like
//!     `Expected number, got string at ."points".[2]."x"`.
//! *   **First-error semantics:** decoding is a left-to-right,
//!     short-circuiting walk. No partial results, no effect on failure.
//! *   **Presence claims:** object fields are required, [`optional`]
//!     (absent or `null` means `None`, `None` omits the key) or
//!     [`defaulted`] (absent or `null` means a fallback, encoding always
//!     writes the real value).
//! *   **Flattening:** a [`self_field`] applies its codec to the *entire*
//!     enclosing object, letting a tagged union keep its discriminant and
//!     payload keys side by side in one flat object.
//! *   **Free thread-safety:** codecs hold no mutable state; one codec value
//!     can serve unboundedly many concurrent encodes and decodes.
//!
//! ## Core Concepts
//!
//! ### `Codec`
//!
//! The unit of composition: `{ encode: &T -> Value, decode: &Value ->
//! Result<T, DecodingError> }`. The scalar codecs [`string`], [`float`],
//! [`int`], [`boolean`] and the identity [`json`] are the leaves; the
//! adapters [`array`], [`dict`], [`nullable`], [`with_default`] and the
//! escape hatch [`custom`] derive bigger codecs from smaller ones.
//!
//! ### `Field`
//!
//! A codec bound to a placement (a named key, or the whole enclosing object)
//! and a presence claim. Fields only exist to be handed to an `objectN`
//! composition.
//!
//! ### Object composition
//!
//! [`object1`]..[`object25`] assemble N fields plus a destruct/construct
//! function pair into one `Codec<T>` for a struct, tuple or opaque type.
//! `construct` may itself fail, which is where cross-field validation lives.
//!
//! ## Usage
//!
//! ```
//! use codecomb::{field, float, object2, optional, string};
//!
//! #[derive(Debug, PartialEq)]
//! struct Measurement {
//!     value: f64,
//!     unit: Option<String>,
//! }
//!
//! let codec = object2(
//!     field("value", float()),
//!     optional(field("unit", string())),
//!     |m: &Measurement| (m.value, m.unit.clone()),
//!     |(value, unit)| Ok(Measurement { value, unit }),
//! );
//!
//! // `None` omits the key entirely.
//! let plain = Measurement { value: 3.5, unit: None };
//! assert_eq!(codec.encode_string(&plain), r#"{"value":3.5}"#);
//!
//! // Missing key and explicit null both decode to `None`.
//! assert_eq!(codec.decode_string(r#"{"value":3.5}"#), Ok(plain));
//! assert_eq!(
//!     codec.decode_string(r#"{"value":3.5,"unit":null}"#),
//!     Ok(Measurement { value: 3.5, unit: None }),
//! );
//!
//! // Structural mismatches point at the failing spot.
//! let err = codec.decode_string(r#"{"value":"three"}"#).unwrap_err();
//! assert_eq!(err.to_string(), r#"Expected number, got string at ."value""#);
//! ```
//!
//! ### Tagged unions
//!
//! A discriminant field plus a [`self_field`] put a variant's payload keys
//! right next to the tag:
//!
//! ```
//! use codecomb::{field, float, object1, object2, self_field, string};
//! use codecomb::{Codec, DecodingError, Location};
//!
//! #[derive(Debug, PartialEq, Clone)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Point,
//! }
//!
//! fn circle_codec() -> Codec<Shape> {
//!     object1(
//!         field("radius", float()),
//!         |shape: &Shape| match shape {
//!             Shape::Circle { radius } => (*radius,),
//!             Shape::Point => unreachable!("tag dispatch"),
//!         },
//!         |(radius,)| Ok(Shape::Circle { radius }),
//!     )
//! }
//!
//! let codec: Codec<Shape> = object2(
//!     field("kind", string()),
//!     self_field(),
//!     |shape: &Shape| {
//!         let kind = match shape {
//!             Shape::Circle { .. } => "circle",
//!             Shape::Point => "point",
//!         };
//!         (kind.to_string(), match shape {
//!             Shape::Circle { .. } => circle_codec().encode(shape),
//!             Shape::Point => serde_json::json!({}),
//!         })
//!     },
//!     |(kind, payload)| match kind.as_str() {
//!         "circle" => circle_codec().decode(&payload),
//!         "point" => Ok(Shape::Point),
//!         other => Err(DecodingError::UnexpectedJsonValue {
//!             location: Location::root(),
//!             repr: format!("\"{other}\""),
//!         }),
//!     },
//! );
//!
//! let circle = Shape::Circle { radius: 2.0 };
//! assert_eq!(codec.encode_string(&circle), r#"{"kind":"circle","radius":2.0}"#);
//! assert_eq!(codec.decode_string(r#"{"kind":"circle","radius":2.0}"#), Ok(circle));
//! ```
//!
//! ## Safety and Error Handling
//!
//! * **No panics on data:** decoding returns `Err` for every data-shape
//!   problem; `unwrap()` and `panic!()` are denied by lint throughout the
//!   library.
//! * **One documented abort:** encoding a [`self_field`] whose codec does not
//!   produce a JSON object panics. That condition is a bug in the codec
//!   definition, not a function of runtime data, and is treated like an
//!   assertion failure rather than a recoverable error.
//! * **Pure values:** codecs never touch global or shared state; encode and
//!   decode are pure functions of their inputs.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod adapters;
pub mod api;
pub mod codec;
pub mod error;
pub mod fields;
pub mod object;

pub use adapters::{array, custom, dict, nullable, with_default};
pub use codec::{boolean, float, int, json, string, Codec};
pub use error::{DecodingError, Location, LocationComponent};
pub use fields::{defaulted, field, optional, self_field, Field};
pub use object::{
    object1, object10, object11, object12, object13, object14, object15, object16, object17,
    object18, object19, object2, object20, object21, object22, object23, object24, object25,
    object3, object4, object5, object6, object7, object8, object9,
};
