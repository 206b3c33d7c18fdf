//! # Introduction
//!
//! Vardeco renders arbitrary runtime values into width-bounded, styled span
//! sequences for fixed-size terminal panes — the variables display of a
//! debugger UI. Callers hand over a value and explicit width/row budgets and
//! always get spans/rows back: truncation and elision are graceful, and no
//! failure escapes a rendering call.
//!
//! ## Rendering pipeline
//!
//! ```text
//! Value + budgets → Registry → Decorator → Spans/Rows → Pane
//! ```
//!
//! 1. [`inspect`] — the introspection boundary: a closed
//!    [`inspect::ValueKind`] tag, the [`inspect::Inspect`] capability trait,
//!    and per-field error reporting.
//! 2. [`decorators`] — kind-to-decorator dispatch with a mandatory generic
//!    fallback, the single-line truncation algorithm, and the depth-1 tree
//!    expansion with exact elision counts.
//! 3. [`render`] — the [`render::Span`]/[`render::Row`] primitives consumed
//!    verbatim by the compositor.
//! 4. [`ui`] — ratatui-based reference consumer (theme, variables pane, demo
//!    app); not part of the stable library API.
//!
//! ## Guarantees
//!
//! - A row never exceeds the width limit it was rendered under.
//! - A tree never exceeds its row budget; omitted fields are summarized with
//!   an exact count.
//! - Rendering is synchronous, read-only, deterministic, and allocation-only
//!   (no I/O, locks, or global state).
//! - A field that fails to read renders as an inline error placeholder; its
//!   siblings still render.

pub mod decorators;
pub mod inspect;
pub mod render;
pub mod ui;
