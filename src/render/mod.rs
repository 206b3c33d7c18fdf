//! Rendering primitives shared by the decorators and the UI
//!
//! - [`span`]: the [`Span`]/[`Row`] data model and the closed [`StyleTag`] set

pub mod span;

pub use span::{Row, Span, StyleTag};
