//! Value introspection interface
//!
//! The rendering engine never sees concrete runtime values. It sees the
//! [`Inspect`] trait: a closed kind tag for decorator dispatch, a best-effort
//! textual form, and optional enumeration of named sub-fields.
//!
//! # Capabilities
//!
//! - [`Inspect::to_text`] must not fail; an adapter that cannot produce a
//!   faithful representation returns whatever placeholder it can.
//! - [`Inspect::named_fields`] must not fail as a whole. A field whose value
//!   cannot be read is reported as that field's `Err`; the engine substitutes
//!   an inline error placeholder and keeps rendering the remaining fields.
//!
//! # Field order
//!
//! `named_fields` returns fields in their declared order. The engine renders
//! them exactly in that order and never sorts, so adapters backed by
//! insertion-ordered storage keep their order on screen.

use std::fmt;

/// Runtime kind of an inspected value, used for decorator dispatch.
///
/// The set is closed: a kind without a registered decorator falls back to the
/// generic decorator, so dispatch is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Opaque object with a `#<Name:0x…>` style signature
    Object,
    String,
    Array,
    Hash,
    Int,
    Float,
    Bool,
    Nil,
}

/// Error reading a single named field.
///
/// These never escape the engine: they are rendered inline at the field that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field's value could not be read
    Inaccessible { reason: String },

    /// The field's value was read but refused to produce a textual form
    TextFailed { reason: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Inaccessible { reason } => {
                write!(f, "unreadable: {}", reason)
            }
            FieldError::TextFailed { reason } => {
                write!(f, "no text: {}", reason)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// One named sub-field of an inspected value.
///
/// The value side is a `Result` so a single unreadable field can be reported
/// without aborting enumeration of its siblings.
pub struct NamedField<'a> {
    pub name: String,
    pub value: Result<&'a dyn Inspect, FieldError>,
}

/// Capability interface over an inspected runtime value.
///
/// Implemented once per value-kind adapter. The engine treats the value as
/// read-only and calls these methods any number of times; repeated calls on
/// an unmodified value must return the same answers.
pub trait Inspect {
    /// Closed kind tag driving decorator dispatch
    fn kind(&self) -> ValueKind;

    /// Best-effort default textual form; must not fail
    fn to_text(&self) -> String;

    /// Whether this value can enumerate named sub-fields
    fn has_named_fields(&self) -> bool {
        false
    }

    /// Named sub-fields in declared order; empty when unsupported
    fn named_fields(&self) -> Vec<NamedField<'_>> {
        Vec::new()
    }
}
