//! String-level entry points: where JSON text meets the codec layer.
//!
//! The codec layer itself only ever sees [`serde_json::Value`]; the actual
//! parse/stringify pair is `serde_json`'s, treated as an external
//! collaborator. This module owns the translation at that boundary, most
//! importantly mapping parser failures into [`DecodingError::Syntax`] so a
//! caller handles malformed text and malformed structure through one error
//! type.

use serde_json::Value;

use crate::codec::Codec;
use crate::error::DecodingError;

impl<T> Codec<T> {
    /// Encodes `value` straight to a JSON string.
    ///
    /// Equivalent to [`Codec::encode`] followed by `serde_json::to_string`.
    pub fn encode_string(&self, value: &T) -> String {
        // An in-memory Value has no non-string keys and no unserializable
        // leaves, so stringification cannot fail.
        serde_json::to_string(&self.encode(value))
            .expect("serializing an in-memory JSON value cannot fail")
    }

    /// Parses `text` as JSON and decodes the result.
    ///
    /// A parse failure maps to [`DecodingError::Syntax`] carrying the
    /// parser's message; anything that parses flows into [`Codec::decode`].
    pub fn decode_string(&self, text: &str) -> Result<T, DecodingError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| DecodingError::Syntax(err.to_string()))?;
        self.decode(&value)
    }
}
