//! String decorator
//!
//! Renders the value's text double-quoted with control characters escaped.
//! When the escaped body exceeds the budget it is truncated so the line
//! closes with `…"`, keeping the output exactly at the limit.

use crate::inspect::Inspect;
use crate::render::{Span, StyleTag};

use super::{minimal_spans, truncate_chars, DecoratorRegistry, ELLIPSIS};

pub struct StringDecorator;

impl super::Decorator for StringDecorator {
    fn decorate_line(
        &self,
        _registry: &DecoratorRegistry,
        value: &dyn Inspect,
        line_limit: usize,
    ) -> Vec<Span> {
        if line_limit < 3 {
            return minimal_spans(line_limit, StyleTag::String);
        }

        let body = escape(&value.to_text());
        let body_width = body.chars().count();

        if body_width + 2 <= line_limit {
            return vec![
                Span::new("\"", StyleTag::String),
                Span::new(body, StyleTag::String),
                Span::new("\"", StyleTag::String),
            ];
        }

        // 1 opening quote + body + ellipsis + closing quote == line_limit
        let truncated = truncate_chars(&body, line_limit - 3);
        vec![
            Span::new("\"", StyleTag::String),
            Span::new(truncated, StyleTag::String),
            Span::new(format!("{}\"", ELLIPSIS), StyleTag::String),
        ]
    }
}

/// Escape control characters so a string occupies exactly one line
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
