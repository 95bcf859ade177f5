//! Location-aware decoding errors.
//!
//! Every decode failure in Codecomb is represented as a value of the closed
//! [`DecodingError`] enum; nothing in the decode path panics for bad data.
//!
//! ## Design Philosophy
//!
//! 1. **Errors are data:** a failed decode returns `Err(DecodingError)`; the
//!    caller pattern-matches or formats it. The library enforces this through
//!    `#![deny(clippy::panic)]` and `#![deny(clippy::unwrap_used)]`.
//!
//! 2. **Locations are prepended, not appended:** an error is born at the leaf
//!    where the mismatch was found, with an empty location. As it bubbles out
//!    through arrays, dictionaries and object fields, each layer *prepends*
//!    its own component, so the final [`Location`] reads root-to-leaf.
//!
//! 3. **One error, not many:** decoding short-circuits on the first failure.
//!    There is no aggregation across fields or elements; the location tells
//!    you exactly which one failed first.
//!
//! ## Rendering
//!
//! [`DecodingError`] implements `Display` with a single-line, dotted-path
//! diagnostic suitable for logs or end-user messages:
//!
//! ```text
//! Expected number, got string at ."point"."x"
//! Missing field "y" at .
//! Unexpected value 42.5 at .[3]
//! ```

use std::fmt;

use serde_json::Value;

/// One step of a decode path: either an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationComponent {
    /// Descended into an object through this key.
    Field(String),
    /// Descended into an array at this index.
    Index(usize),
}

/// Root-to-leaf path from the decode entry point to the failure site.
///
/// Internally a component list in root-to-leaf order. Layers discover their
/// own position from the outside in, so context is added with
/// [`Location::prepend`] rather than pushed at the back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location(Vec<LocationComponent>);

impl Location {
    /// The empty location: the decode root itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Adds `component` at the *front* of the path.
    pub fn prepend(&mut self, component: LocationComponent) {
        self.0.insert(0, component);
    }

    /// The components in root-to-leaf order.
    pub fn components(&self) -> &[LocationComponent] {
        &self.0
    }
}

impl fmt::Display for Location {
    /// Renders `.` followed by the components joined by `.`; keys are quoted,
    /// indices bracketed. The root alone renders as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match component {
                LocationComponent::Field(name) => write!(f, "\"{name}\"")?,
                LocationComponent::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

/// Classifies a JSON value into its kind name, as used in diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The closed sum of every way a decode can fail.
///
/// ## Variants
///
/// - **Syntax:** the input *text* was not valid JSON. Only the string-level
///   entry points can produce it; it predates any structural walk, so it
///   carries no location.
/// - **MissingField:** a required key was absent from a JSON object.
/// - **UnexpectedJsonType:** a value was present but of the wrong JSON kind
///   (e.g. a string where a number was declared).
/// - **UnexpectedJsonValue:** a value was present, of the right kind, but
///   semantically invalid: a fractional or out-of-range `int`, or an
///   unrecognized discriminant tag in a user-written tagged-union decoder.
///
/// The enum is `PartialEq` so tests (and callers) can compare errors
/// structurally, and `Clone` so errors can be stored or re-reported.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodingError {
    /// Malformed JSON text. The message comes from the parser.
    Syntax(String),

    /// A required object key was absent.
    MissingField {
        /// Path to the object that was missing the key.
        location: Location,
        /// The absent key.
        key: String,
    },

    /// A value of the wrong JSON kind was found.
    UnexpectedJsonType {
        /// Path to the offending value.
        location: Location,
        /// The kind the codec declared, e.g. `"number"`.
        expected: &'static str,
        /// The value actually found; its kind is derived when formatting.
        actual: Value,
    },

    /// A value of the right kind but invalid content was found.
    UnexpectedJsonValue {
        /// Path to the offending value.
        location: Location,
        /// Rendering of the offending value, e.g. `"42.5"`.
        repr: String,
    },
}

impl DecodingError {
    /// Adds one layer of location context to the error.
    ///
    /// `Syntax` has no location (it predates the structural walk) and passes
    /// through untouched; every other variant gets `component` prepended to
    /// its stored path. Adapters and the object engine call this as errors
    /// surface from nested decodes.
    #[must_use]
    pub fn prepend_location(mut self, component: LocationComponent) -> Self {
        match &mut self {
            Self::Syntax(_) => {}
            Self::MissingField { location, .. }
            | Self::UnexpectedJsonType { location, .. }
            | Self::UnexpectedJsonValue { location, .. } => location.prepend(component),
        }
        self
    }
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(message) => write!(f, "{message}"),
            Self::MissingField { location, key } => {
                write!(f, "Missing field \"{key}\" at {location}")
            }
            Self::UnexpectedJsonType {
                location,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Expected {expected}, got {kind} at {location}",
                    kind = json_kind(actual)
                )
            }
            Self::UnexpectedJsonValue { location, repr } => {
                write!(f, "Unexpected value {repr} at {location}")
            }
        }
    }
}

impl std::error::Error for DecodingError {}
