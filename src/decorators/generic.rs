//! Generic decorator for opaque objects and unrecognized kinds
//!
//! Works from the value's default textual form alone, so it can render
//! anything that implements [`Inspect`]. Signatures shaped like
//! `#<Name:0x… detail>` get the name preserved and the detail truncated
//! first; any other text is emitted as-is when it fits or truncated with a
//! closing delimiter when it does not.
//!
//! # Boundary policy
//!
//! The whole-text fast path is inclusive (`text width ≤ limit` fits), while
//! the signature detail check is strict (`detail width < limit − name − 3`
//! fits). The asymmetry is intentional: the signature path reserves one spare
//! column so a maximally long detail still truncates instead of landing flush
//! against the pane edge. Both branches are pinned by tests.

use crate::inspect::Inspect;
use crate::render::{Span, StyleTag};

use super::{minimal_spans, truncate_chars, DecoratorRegistry, ELLIPSIS};

/// Fallback decorator; registered for no kind, reached for all of them
pub struct GenericDecorator;

impl super::Decorator for GenericDecorator {
    fn decorate_line(
        &self,
        _registry: &DecoratorRegistry,
        value: &dyn Inspect,
        line_limit: usize,
    ) -> Vec<Span> {
        let text = value.to_text();

        if let Some((name, detail)) = split_signature(&text) {
            let name_width = name.chars().count();
            // "#<" + ">" + one spare column
            if line_limit > name_width + 3 {
                let detail_budget = line_limit - name_width - 3;
                let detail_width = detail.chars().count();
                let detail = if detail_width < detail_budget {
                    detail.to_string()
                } else {
                    let mut truncated = truncate_chars(detail, detail_budget - 1);
                    truncated.push(ELLIPSIS);
                    truncated
                };
                return vec![
                    Span::new("#<", StyleTag::TextSecondary),
                    Span::new(name, StyleTag::TextSecondary),
                    Span::new(detail, StyleTag::TextSecondary),
                    Span::new(">", StyleTag::TextSecondary),
                ];
            }
            // Too narrow for the signature shape; fall back to raw handling
        }

        if text.chars().count() <= line_limit {
            return vec![Span::new(text, StyleTag::TextSecondary)];
        }

        if line_limit >= 3 {
            let mut truncated = truncate_chars(&text, line_limit - 3);
            truncated.push(ELLIPSIS);
            truncated.push('>');
            return vec![Span::new(truncated, StyleTag::TextSecondary)];
        }

        minimal_spans(line_limit, StyleTag::TextSecondary)
    }
}

/// Split an opaque-object signature `#<Name:0x… detail>` into its name part
/// and detail part (the detail keeps the leading `:0x`). Returns `None` for
/// any other shape.
fn split_signature(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix("#<")?.strip_suffix('>')?;
    let at = inner.find(":0x")?;
    let (name, detail) = inner.split_at(at);
    let first_hex = detail[3..].chars().next()?;
    if name.is_empty() || !first_hex.is_ascii_hexdigit() {
        return None;
    }
    Some((name, detail))
}
