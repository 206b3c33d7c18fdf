//! Value model for the rendering engine
//!
//! This module provides the introspection boundary between the engine and
//! whatever runtime is being debugged:
//!
//! - [`value`]: the [`Inspect`] capability trait, the closed [`ValueKind`]
//!   tag set, and per-field error reporting
//! - [`sample`]: a concrete [`SampleValue`] adapter used by the demo binary
//!   and the tests

pub mod sample;
pub mod value;

pub use sample::SampleValue;
pub use value::{FieldError, Inspect, NamedField, ValueKind};
