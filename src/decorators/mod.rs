//! Width-bounded value decoration
//!
//! This module is the engine's public surface. A caller hands over any
//! [`Inspect`] value plus explicit width/row budgets and always gets spans or
//! rows back — decoration never fails out to the caller.
//!
//! # Dispatch
//!
//! [`DecoratorRegistry`] maps a value's [`ValueKind`] to the decorator
//! responsible for it:
//!
//! - [`generic`] — opaque objects and every kind without a registered
//!   decorator (the mandatory fallback; lookup is total)
//! - [`string`], [`array`], [`hash`], [`scalar`] — sibling decorators, one
//!   per kind, all obeying the same width contract
//!
//! # Budgets
//!
//! Every entry point takes its limits explicitly; nothing is read from
//! ambient state. Width arithmetic saturates at zero, so a degenerate budget
//! produces a minimal ellipsis/empty span instead of underflowing or
//! panicking. Widths are counted in chars (see [`crate::render::span`]).
//!
//! # Tree expansion
//!
//! [`decorate_tree`] expands one level of named sub-fields, each rendered
//! single-line. Sub-fields never expand their own sub-fields, which keeps
//! cost linear in the field count and makes cyclic values harmless. A field
//! whose value cannot be read renders as an inline error placeholder while
//! its siblings render normally.

pub mod array;
pub mod generic;
pub mod hash;
pub mod scalar;
pub mod string;

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::inspect::{FieldError, Inspect, NamedField, ValueKind};
use crate::render::{Row, Span, StyleTag};

use generic::GenericDecorator;

/// Single ellipsis marker used for every truncation and elision
pub const ELLIPSIS: char = '…';

/// Columns reserved on a field row for the bullet glyph, its margins, the
/// name's trailing margin, and the `=` separator with its margin
const FIELD_ROW_OVERHEAD: usize = 7;

/// A value-kind-specific single-line rendering strategy.
///
/// Implementations must return spans whose combined width never exceeds
/// `line_limit` and must not fail; a decorator that cannot represent a value
/// within budget truncates with a trailing [`ELLIPSIS`].
///
/// Decorators receive the registry so composite kinds (arrays, hashes) can
/// dispatch their elements through it.
pub trait Decorator: Send + Sync {
    fn decorate_line(
        &self,
        registry: &DecoratorRegistry,
        value: &dyn Inspect,
        line_limit: usize,
    ) -> Vec<Span>;
}

/// Kind-to-decorator dispatch table with a mandatory generic fallback.
pub struct DecoratorRegistry {
    decorators: FxHashMap<ValueKind, Box<dyn Decorator>>,
    generic: GenericDecorator,
}

impl DecoratorRegistry {
    /// Build the default registry with the sibling decorators registered
    pub fn new() -> Self {
        let mut decorators: FxHashMap<ValueKind, Box<dyn Decorator>> =
            FxHashMap::default();
        decorators.insert(ValueKind::String, Box::new(string::StringDecorator));
        decorators.insert(ValueKind::Array, Box::new(array::ArrayDecorator));
        decorators.insert(ValueKind::Hash, Box::new(hash::HashDecorator));
        for kind in [
            ValueKind::Int,
            ValueKind::Float,
            ValueKind::Bool,
            ValueKind::Nil,
        ] {
            decorators.insert(kind, Box::new(scalar::ScalarDecorator));
        }
        DecoratorRegistry {
            decorators,
            generic: GenericDecorator,
        }
    }

    /// Register (or replace) the decorator for a kind
    pub fn register(&mut self, kind: ValueKind, decorator: Box<dyn Decorator>) {
        self.decorators.insert(kind, decorator);
    }

    /// Total lookup: kinds without a registered decorator resolve to the
    /// generic decorator
    fn decorator_for(&self, kind: ValueKind) -> &dyn Decorator {
        match self.decorators.get(&kind) {
            Some(decorator) => decorator.as_ref(),
            None => &self.generic,
        }
    }

    /// Render one width-bounded line for a value.
    ///
    /// The returned spans' combined width never exceeds `line_limit`.
    pub fn decorate_line(&self, value: &dyn Inspect, line_limit: usize) -> Vec<Span> {
        self.decorator_for(value.kind())
            .decorate_line(self, value, line_limit)
    }

    /// Render a bounded tree: one signature row plus up to `lines - 2` field
    /// rows, each sub-field rendered single-line.
    ///
    /// Returns at most `lines` rows. When fields are omitted, the final row
    /// is a summary carrying the exact omitted count. A row budget below 2
    /// is clamped to 2, the smallest budget that can hold the signature row
    /// plus an elision summary.
    pub fn decorate_tree(
        &self,
        value: &dyn Inspect,
        first_line_limit: usize,
        lines: usize,
        line_limit: usize,
    ) -> Vec<Row> {
        let lines = lines.max(2);
        let mut rows = vec![Row::new(self.decorate_line(value, first_line_limit))];

        if !value.has_named_fields() {
            return rows;
        }

        let fields = value.named_fields();
        let total = fields.len();
        let max_fields = lines.saturating_sub(2);
        let mut rendered = 0;

        for field in fields.iter().take(max_fields) {
            rows.push(self.field_row(field, line_limit));
            rendered += 1;
        }

        if total > rendered {
            rows.push(summary_row(total - rendered, line_limit));
        }

        rows
    }

    /// Render one `▸ name = value` row bounded by `line_limit`
    fn field_row(&self, field: &NamedField<'_>, line_limit: usize) -> Row {
        if line_limit < FIELD_ROW_OVERHEAD {
            // Not even the bullet and separator fit
            return Row::new(minimal_spans(line_limit, StyleTag::TextDim));
        }

        let name_width = field.name.chars().count();
        let (label, value_budget) = if name_width + FIELD_ROW_OVERHEAD <= line_limit {
            (
                field.name.clone(),
                line_limit - name_width - FIELD_ROW_OVERHEAD,
            )
        } else {
            // The name alone blows the budget; truncate it and drop the value
            (
                fit_or_truncate(&field.name, line_limit - FIELD_ROW_OVERHEAD),
                0,
            )
        };

        let value_spans = match &field.value {
            Ok(nested) => self.decorate_line(*nested, value_budget),
            Err(error) => error_spans(error, value_budget),
        };

        let mut spans = vec![
            Span::with_margin("▸", StyleTag::TextDim, 2, 1),
            Span::with_margin(label, StyleTag::TextSecondary, 0, 1),
            Span::with_margin("=", StyleTag::TextSecondary, 0, 1),
        ];
        spans.extend(value_spans);
        Row::new(spans)
    }
}

impl Default for DecoratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: OnceLock<DecoratorRegistry> = OnceLock::new();

fn default_registry() -> &'static DecoratorRegistry {
    DEFAULT_REGISTRY.get_or_init(DecoratorRegistry::new)
}

/// [`DecoratorRegistry::decorate_line`] on the default registry
pub fn decorate_line(value: &dyn Inspect, line_limit: usize) -> Vec<Span> {
    default_registry().decorate_line(value, line_limit)
}

/// [`DecoratorRegistry::decorate_tree`] on the default registry
pub fn decorate_tree(
    value: &dyn Inspect,
    first_line_limit: usize,
    lines: usize,
    line_limit: usize,
) -> Vec<Row> {
    default_registry().decorate_tree(value, first_line_limit, lines, line_limit)
}

/// `▸ N more…` elision row with the exact omitted count
fn summary_row(omitted: usize, line_limit: usize) -> Row {
    if line_limit < 2 {
        // No room for even the bullet margin
        return Row::new(minimal_spans(line_limit, StyleTag::TextDim));
    }
    let content = format!("▸ {} more{}", omitted, ELLIPSIS);
    let content = if content.chars().count() + 2 <= line_limit {
        content
    } else {
        fit_or_truncate(&content, line_limit.saturating_sub(2))
    };
    Row::new(vec![Span::with_margin(content, StyleTag::TextDim, 2, 0)])
}

/// Inline placeholder for a field that failed to read or render
pub(crate) fn error_spans(error: &FieldError, line_limit: usize) -> Vec<Span> {
    vec![Span::new(
        fit_or_truncate(&format!("⚠ {}", error), line_limit),
        StyleTag::Error,
    )]
}

/// Smallest representable output for a degenerate budget: an ellipsis when
/// one column is available, an empty span otherwise
pub(crate) fn minimal_spans(line_limit: usize, style: StyleTag) -> Vec<Span> {
    if line_limit == 0 {
        vec![Span::new("", style)]
    } else {
        vec![Span::new(ELLIPSIS.to_string(), style)]
    }
}

/// First `max_chars` chars of `s`, always on a char boundary
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// `s` unchanged if it fits in `max_chars`, otherwise truncated with a
/// trailing ellipsis so the result is exactly `max_chars` wide
pub(crate) fn fit_or_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let mut out = truncate_chars(s, max_chars - 1);
        out.push(ELLIPSIS);
        out
    }
}

/// Combined width of a span sequence
pub(crate) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(Span::width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::SampleValue;

    #[test]
    fn unregistered_kinds_fall_back_to_generic() {
        let mut registry = DecoratorRegistry::new();
        // Simulate an embedder that never registered a string decorator by
        // rebuilding dispatch without one
        registry.decorators.remove(&ValueKind::String);

        let value = SampleValue::Str("plain".to_string());
        let spans = registry.decorate_line(&value, 40);
        // Generic fallback renders the raw textual form, unquoted
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "plain");
    }

    #[test]
    fn fit_or_truncate_is_exact_at_the_boundary() {
        assert_eq!(fit_or_truncate("abcd", 4), "abcd");
        assert_eq!(fit_or_truncate("abcde", 4), "abc…");
        assert_eq!(fit_or_truncate("abcde", 0), "");
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(fit_or_truncate("日本語テキスト", 4), "日本語…");
    }

    #[test]
    fn summary_row_keeps_exact_count() {
        let row = summary_row(12, 80);
        assert_eq!(row.spans.len(), 1);
        assert_eq!(row.spans[0].content, "▸ 12 more…");
    }
}
