//! Concrete value adapters backing the demo binary and the test suite
//!
//! [`SampleValue`] is a tagged representation of the runtime values a halted
//! debugger would hand to the engine. Production embedders implement
//! [`Inspect`] directly over their own runtime; this enum exists so the crate
//! can be exercised end to end without one.
//!
//! The [`SampleValue::Unreadable`] variant stands in for a field whose value
//! cannot be fetched from the debuggee (lazy attribute that raised, dropped
//! connection, freed memory). Enumeration reports such fields as `Err` so the
//! engine's fault isolation path is reachable from tests and the demo.

use super::value::{FieldError, Inspect, NamedField, ValueKind};

/// Sample runtime values for demos and tests
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Nil,
    Str(String),
    Array(Vec<SampleValue>),
    /// Insertion-ordered key/value pairs
    Hash(Vec<(String, SampleValue)>),
    /// Opaque object: class name, identity address, optional one-line
    /// summary, and named instance fields in declaration order
    Object {
        class_name: String,
        address: u64,
        summary: String,
        fields: Vec<(String, SampleValue)>,
    },
    /// A value that cannot be read; surfaces as a per-field error
    Unreadable(String),
}

impl SampleValue {
    /// Shorthand for an object with no summary text
    pub fn object(
        class_name: &str,
        address: u64,
        fields: Vec<(String, SampleValue)>,
    ) -> Self {
        SampleValue::Object {
            class_name: class_name.to_string(),
            address,
            summary: String::new(),
            fields,
        }
    }

    fn field_entry<'a>(name: &str, value: &'a SampleValue) -> NamedField<'a> {
        let value = match value {
            SampleValue::Unreadable(reason) => Err(FieldError::Inaccessible {
                reason: reason.clone(),
            }),
            other => Ok(other as &dyn Inspect),
        };
        NamedField {
            name: name.to_string(),
            value,
        }
    }
}

impl Inspect for SampleValue {
    fn kind(&self) -> ValueKind {
        match self {
            SampleValue::Int(_) => ValueKind::Int,
            SampleValue::Float(_) => ValueKind::Float,
            SampleValue::Bool(_) => ValueKind::Bool,
            SampleValue::Nil => ValueKind::Nil,
            SampleValue::Str(_) => ValueKind::String,
            SampleValue::Array(_) => ValueKind::Array,
            SampleValue::Hash(_) => ValueKind::Hash,
            SampleValue::Object { .. } => ValueKind::Object,
            SampleValue::Unreadable(_) => ValueKind::Object,
        }
    }

    fn to_text(&self) -> String {
        match self {
            SampleValue::Int(n) => format!("{}", n),
            SampleValue::Float(x) => format!("{}", x),
            SampleValue::Bool(b) => format!("{}", b),
            SampleValue::Nil => "nil".to_string(),
            SampleValue::Str(s) => s.clone(),
            SampleValue::Array(elements) => format!("(array of {})", elements.len()),
            SampleValue::Hash(pairs) => format!("(hash of {})", pairs.len()),
            SampleValue::Object {
                class_name,
                address,
                summary,
                ..
            } => {
                if summary.is_empty() {
                    format!("#<{}:0x{:08x}>", class_name, address)
                } else {
                    format!("#<{}:0x{:08x} {}>", class_name, address, summary)
                }
            }
            SampleValue::Unreadable(reason) => format!("(unreadable: {})", reason),
        }
    }

    fn has_named_fields(&self) -> bool {
        matches!(
            self,
            SampleValue::Array(_) | SampleValue::Hash(_) | SampleValue::Object { .. }
        )
    }

    fn named_fields(&self) -> Vec<NamedField<'_>> {
        match self {
            SampleValue::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(i, elem)| Self::field_entry(&format!("[{}]", i), elem))
                .collect(),
            SampleValue::Hash(pairs) => pairs
                .iter()
                .map(|(key, value)| Self::field_entry(key, value))
                .collect(),
            SampleValue::Object { fields, .. } => fields
                .iter()
                .map(|(name, value)| Self::field_entry(name, value))
                .collect(),
            _ => Vec::new(),
        }
    }
}
