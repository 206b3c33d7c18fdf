//! Array decorator
//!
//! Single-line form `[elem, elem, …]` with per-element budgeting: each
//! element is dispatched back through the registry with the width left over,
//! and a dim ellipsis marks any elements that did not fit. Room for the
//! marker and the closing bracket is reserved before an element is admitted,
//! so the line never overflows and an elision is never silent.

use crate::inspect::Inspect;
use crate::render::{Span, StyleTag};

use super::{error_spans, minimal_spans, spans_width, DecoratorRegistry, ELLIPSIS};

pub struct ArrayDecorator;

impl super::Decorator for ArrayDecorator {
    fn decorate_line(
        &self,
        registry: &DecoratorRegistry,
        value: &dyn Inspect,
        line_limit: usize,
    ) -> Vec<Span> {
        let fields = value.named_fields();
        let total = fields.len();

        if total == 0 {
            if line_limit >= 2 {
                return vec![Span::new("[]", StyleTag::TextSecondary)];
            }
            return minimal_spans(line_limit, StyleTag::TextSecondary);
        }
        if line_limit < 3 {
            return minimal_spans(line_limit, StyleTag::TextSecondary);
        }

        let mut spans = vec![Span::new("[", StyleTag::TextSecondary)];
        let mut used = 1;
        let mut shown = 0;

        for (i, field) in fields.iter().enumerate() {
            let separator_width = if i > 0 { 2 } else { 0 };
            // Closing bracket, plus the elision marker when elements remain
            let reserved = if i + 1 == total { 1 } else { 2 };
            let budget = line_limit.saturating_sub(used + separator_width + reserved);
            if budget == 0 {
                break;
            }

            let element = match &field.value {
                Ok(nested) => registry.decorate_line(*nested, budget),
                Err(error) => error_spans(error, budget),
            };

            if separator_width > 0 {
                spans.push(Span::new(", ", StyleTag::TextDim));
                used += separator_width;
            }
            used += spans_width(&element);
            spans.extend(element);
            shown += 1;
        }

        if shown < total {
            spans.push(Span::new(ELLIPSIS.to_string(), StyleTag::TextDim));
        }
        spans.push(Span::new("]", StyleTag::TextSecondary));
        spans
    }
}
