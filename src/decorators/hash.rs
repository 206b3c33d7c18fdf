//! Hash decorator
//!
//! Single-line form `{key → value, …}`. Keys render in their insertion
//! order; each pair's value is dispatched back through the registry with the
//! width remaining after the key and arrow. Elision follows the array
//! decorator's reservation scheme.

use crate::inspect::Inspect;
use crate::render::{Span, StyleTag};

use super::{error_spans, minimal_spans, spans_width, DecoratorRegistry, ELLIPSIS};

pub struct HashDecorator;

impl super::Decorator for HashDecorator {
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
                return vec![Span::new("{}", StyleTag::TextSecondary)];
            }
            return minimal_spans(line_limit, StyleTag::TextSecondary);
        }
        if line_limit < 3 {
            return minimal_spans(line_limit, StyleTag::TextSecondary);
        }

        let mut spans = vec![Span::new("{", StyleTag::TextSecondary)];
        let mut used = 1;
        let mut shown = 0;

        for (i, field) in fields.iter().enumerate() {
            let separator_width = if i > 0 { 2 } else { 0 };
            let reserved = if i + 1 == total { 1 } else { 2 };
            let key_width = field.name.chars().count();
            // key + "→" with a margin either side
            let pair_overhead = key_width + 3;
            let budget = line_limit
                .saturating_sub(used + separator_width + pair_overhead + reserved);
            if budget == 0 {
                break;
            }

            let pair_value = match &field.value {
                Ok(nested) => registry.decorate_line(*nested, budget),
                Err(error) => error_spans(error, budget),
            };

            if separator_width > 0 {
                spans.push(Span::new(", ", StyleTag::TextDim));
                used += separator_width;
            }
            spans.push(Span::new(field.name.clone(), StyleTag::TextSecondary));
            spans.push(Span::with_margin("→", StyleTag::TextDim, 1, 1));
            used += pair_overhead;
            used += spans_width(&pair_value);
            spans.extend(pair_value);
            shown += 1;
        }

        if shown < total {
            spans.push(Span::new(ELLIPSIS.to_string(), StyleTag::TextDim));
        }
        spans.push(Span::new("}", StyleTag::TextSecondary));
        spans
    }
}
