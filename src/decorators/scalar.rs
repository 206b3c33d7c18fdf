//! Scalar decorator: integers, floats, booleans, nil
//!
//! Scalars render as their literal text with a kind-appropriate style tag,
//! truncated with a trailing ellipsis only when the literal itself exceeds
//! the budget (very long integers, exotic float formats).

use crate::inspect::{Inspect, ValueKind};
use crate::render::{Span, StyleTag};

use super::{fit_or_truncate, DecoratorRegistry};

pub struct ScalarDecorator;

impl super::Decorator for ScalarDecorator {
    fn decorate_line(
        &self,
        _registry: &DecoratorRegistry,
        value: &dyn Inspect,
        line_limit: usize,
    ) -> Vec<Span> {
        let style = match value.kind() {
            ValueKind::Int | ValueKind::Float => StyleTag::Number,
            ValueKind::Bool | ValueKind::Nil => StyleTag::Keyword,
            _ => StyleTag::TextPrimary,
        };
        vec![Span::new(fit_or_truncate(&value.to_text(), line_limit), style)]
    }
}
