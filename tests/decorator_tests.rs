// Integration tests for the value decoration engine

use vardeco::decorators::{decorate_line, decorate_tree, DecoratorRegistry};
use vardeco::inspect::{Inspect, SampleValue, ValueKind};
use vardeco::render::{Row, Span, StyleTag};

/// Opaque test value with a fully controlled textual form
struct Opaque(&'static str);

impl Inspect for Opaque {
    fn kind(&self) -> ValueKind {
        ValueKind::Object
    }

    fn to_text(&self) -> String {
        self.0.to_string()
    }
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(Span::width).sum()
}

fn row_text(row: &Row) -> String {
    let mut out = String::new();
    for span in &row.spans {
        for _ in 0..span.margin_left {
            out.push(' ');
        }
        out.push_str(&span.content);
        for _ in 0..span.margin_right {
            out.push(' ');
        }
    }
    out
}

fn object_with_fields(count: usize) -> SampleValue {
    let fields = (0..count)
        .map(|i| (format!("field_{}", i), SampleValue::Int(i as i64)))
        .collect();
    SampleValue::object("Widget", 0xbeef, fields)
}

#[test]
fn line_width_never_exceeds_limit() {
    let values: Vec<SampleValue> = vec![
        SampleValue::Int(1234567890),
        SampleValue::Float(3.14159265),
        SampleValue::Bool(false),
        SampleValue::Nil,
        SampleValue::Str("a moderately long string with\ttabs and\nnewlines".to_string()),
        SampleValue::Array(vec![
            SampleValue::Int(1),
            SampleValue::Str("two".to_string()),
            SampleValue::Array(vec![SampleValue::Int(3), SampleValue::Int(4)]),
        ]),
        SampleValue::Hash(vec![
            ("alpha".to_string(), SampleValue::Int(1)),
            ("beta".to_string(), SampleValue::Str("value".to_string())),
        ]),
        SampleValue::Object {
            class_name: "VeryLongClassNameIndeed".to_string(),
            address: 0xdeadbeef,
            summary: "with a verbose summary trailing after the address".to_string(),
            fields: Vec::new(),
        },
    ];

    for value in &values {
        for limit in 0..=60 {
            let spans = decorate_line(value, limit);
            assert!(
                spans_width(&spans) <= limit,
                "width {} > limit {} for {:?}",
                spans_width(&spans),
                limit,
                value
            );
            assert!(!spans.is_empty());
        }
    }
}

#[test]
fn degenerate_limits_yield_minimal_output() {
    let obj = object_with_fields(3);

    let spans = decorate_line(&obj, 0);
    assert_eq!(spans_width(&spans), 0);

    let spans = decorate_line(&obj, 1);
    assert!(spans_width(&spans) <= 1);

    // A row budget below 2 is clamped: signature row + summary, nothing more
    let rows = decorate_tree(&obj, 80, 0, 80);
    assert_eq!(rows.len(), 2);
    assert!(row_text(&rows[1]).ends_with("3 more…"));

    // Never panics, even at limit 0 for every kind
    for value in [
        SampleValue::Nil,
        SampleValue::Str("x".to_string()),
        SampleValue::Array(vec![SampleValue::Int(1)]),
        SampleValue::Hash(vec![("k".to_string(), SampleValue::Int(1))]),
    ] {
        let _ = decorate_line(&value, 0);
    }
}

#[test]
fn signature_detail_truncates_with_ellipsis() {
    // "#<Foo:0x00001234 extra details...>" at limit 20: the detail span must
    // shrink to at most 20 - len("Foo") - 3 = 14 chars and end with the
    // ellipsis
    let value = Opaque("#<Foo:0x00001234 extra details...>");
    let spans = decorate_line(&value, 20);

    assert_eq!(spans.len(), 4);
    assert_eq!(spans[0].content, "#<");
    assert_eq!(spans[1].content, "Foo");
    assert_eq!(spans[3].content, ">");

    let detail_len = spans[2].content.chars().count();
    assert!(detail_len <= 14, "detail {} too wide", detail_len);
    assert!(spans[2].content.ends_with('…'));
    assert!(spans_width(&spans) <= 20);
}

#[test]
fn boundary_policy_is_inclusive_for_raw_text_strict_for_detail() {
    // Raw text exactly at the limit fits unmodified (inclusive boundary)
    let exact = Opaque("0123456789");
    let spans = decorate_line(&exact, 10);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content, "0123456789");

    // One char over truncates with a closing delimiter
    let over = Opaque("0123456789X");
    let spans = decorate_line(&over, 10);
    assert_eq!(spans.len(), 1);
    assert!(spans[0].content.ends_with("…>"));
    assert!(spans_width(&spans) <= 10);

    // Signature detail exactly at its budget truncates (strict boundary):
    // name "Foo" (3), detail ":0xABCD" (7), budget at limit 13 is exactly 7
    let sig = Opaque("#<Foo:0xABCD>");
    let spans = decorate_line(&sig, 13);
    assert_eq!(spans.len(), 4);
    assert!(spans[2].content.ends_with('…'));
    assert_eq!(spans[2].content.chars().count(), 7);

    // One more column and the same detail fits unmodified
    let spans = decorate_line(&sig, 14);
    assert_eq!(spans[2].content, ":0xABCD");
}

#[test]
fn tree_respects_row_budget_with_exact_summary_count() {
    let obj = object_with_fields(10);

    for lines in 2..=12 {
        let rows = decorate_tree(&obj, 80, lines, 80);
        assert!(rows.len() <= lines, "{} rows for budget {}", rows.len(), lines);

        let rendered = lines.saturating_sub(2).min(10);
        if rendered < 10 {
            let last = row_text(rows.last().unwrap());
            let expected = format!("{} more…", 10 - rendered);
            assert!(
                last.trim_start().trim_start_matches("▸ ").starts_with(&expected),
                "expected '{}' in '{}'",
                expected,
                last
            );
        }
    }
}

#[test]
fn five_fields_in_five_rows_elides_exactly_two() {
    // 3 field rows fit under this budget; the 2 omitted fields must be
    // counted exactly
    let obj = object_with_fields(5);
    let rows = decorate_tree(&obj, 80, 5, 80);

    assert_eq!(rows.len(), 5); // signature + 3 fields + summary
    assert!(row_text(&rows[1]).contains("field_0"));
    assert!(row_text(&rows[3]).contains("field_2"));
    assert!(row_text(&rows[4]).ends_with("2 more…"));
}

#[test]
fn single_field_produces_two_rows_and_no_summary() {
    let obj = object_with_fields(1);
    let rows = decorate_tree(&obj, 80, 4, 80);

    assert_eq!(rows.len(), 2);
    assert!(row_text(&rows[1]).contains("field_0"));
    assert!(!row_text(&rows[1]).contains("more…"));
}

#[test]
fn value_without_fields_renders_one_row() {
    let rows = decorate_tree(&SampleValue::Int(42), 80, 6, 80);
    assert_eq!(rows.len(), 1);

    // An object exposing zero fields also gets no field or summary rows
    let empty = SampleValue::object("Empty", 0x1, Vec::new());
    let rows = decorate_tree(&empty, 80, 6, 80);
    assert_eq!(rows.len(), 1);
}

#[test]
fn tree_rows_stay_within_width_limits() {
    let obj = SampleValue::object(
        "Config",
        0xc0ffee,
        vec![
            (
                "endpoint_with_a_rather_long_name".to_string(),
                SampleValue::Str("https://api.example.com/v2/long/path/segment".to_string()),
            ),
            (
                "nested".to_string(),
                SampleValue::object("Inner", 0x2, vec![("x".to_string(), SampleValue::Int(1))]),
            ),
            ("count".to_string(), SampleValue::Int(9000)),
        ],
    );

    for line_limit in [12, 20, 30, 50, 80] {
        let rows = decorate_tree(&obj, line_limit, 10, line_limit);
        for row in &rows {
            assert!(
                row.width() <= line_limit,
                "row '{}' width {} > {}",
                row_text(row),
                row.width(),
                line_limit
            );
        }
    }

    // Degenerate widths: field rows and the elision summary both collapse to
    // the minimal form instead of letting a bullet margin leak past the limit
    let wide = object_with_fields(5);
    for line_limit in 0..=8 {
        let rows = decorate_tree(&wide, line_limit, 4, line_limit);
        for row in rows.iter().skip(1) {
            assert!(
                row.width() <= line_limit,
                "row '{}' width {} > {}",
                row_text(row),
                row.width(),
                line_limit
            );
        }
    }
}

#[test]
fn rendering_is_idempotent() {
    let obj = SampleValue::object(
        "Session",
        0xabc,
        vec![
            ("user".to_string(), SampleValue::Str("ada".to_string())),
            ("attempts".to_string(), SampleValue::Int(2)),
        ],
    );

    assert_eq!(decorate_line(&obj, 24), decorate_line(&obj, 24));
    assert_eq!(
        decorate_tree(&obj, 40, 6, 40),
        decorate_tree(&obj, 40, 6, 40)
    );
}

#[test]
fn field_order_is_preserved_for_any_declaration_order() {
    for names in [
        ["zeta", "alpha", "mid"],
        ["alpha", "mid", "zeta"],
        ["mid", "zeta", "alpha"],
    ] {
        let fields = names
            .iter()
            .map(|n| (n.to_string(), SampleValue::Int(0)))
            .collect();
        let obj = SampleValue::object("Bag", 0x3, fields);

        let rows = decorate_tree(&obj, 80, 10, 80);
        assert_eq!(rows.len(), 4);
        for (row, name) in rows[1..].iter().zip(names) {
            assert!(
                row_text(row).contains(name),
                "expected '{}' in '{}'",
                name,
                row_text(row)
            );
        }
    }
}

#[test]
fn one_unreadable_field_does_not_abort_the_render() {
    let obj = SampleValue::object(
        "Conn",
        0x4,
        vec![
            ("host".to_string(), SampleValue::Str("db1".to_string())),
            (
                "socket".to_string(),
                SampleValue::Unreadable("closed stream".to_string()),
            ),
            ("port".to_string(), SampleValue::Int(5432)),
            ("tls".to_string(), SampleValue::Bool(true)),
        ],
    );

    let rows = decorate_tree(&obj, 80, 10, 80);
    assert_eq!(rows.len(), 5);

    assert!(row_text(&rows[1]).contains("db1"));
    assert!(row_text(&rows[3]).contains("5432"));
    assert!(row_text(&rows[4]).contains("true"));

    let error_row = row_text(&rows[2]);
    assert!(error_row.contains("unreadable"), "got '{}'", error_row);
    assert!(rows[2]
        .spans
        .iter()
        .any(|span| span.style == StyleTag::Error));
}

#[test]
fn sub_fields_render_single_line_only() {
    // Depth-1 bound: a nested object contributes one row, not a subtree
    let inner = SampleValue::object(
        "Inner",
        0x5,
        vec![
            ("a".to_string(), SampleValue::Int(1)),
            ("b".to_string(), SampleValue::Int(2)),
        ],
    );
    let outer = SampleValue::object("Outer", 0x6, vec![("inner".to_string(), inner)]);

    let rows = decorate_tree(&outer, 80, 10, 80);
    assert_eq!(rows.len(), 2);
    assert!(row_text(&rows[1]).contains("#<Inner"));
}

#[test]
fn strings_quote_escape_and_truncate() {
    let value = SampleValue::Str("line one\nline two".to_string());
    let spans = decorate_line(&value, 40);
    let text: String = spans.iter().map(|s| s.content.as_str()).collect();
    assert_eq!(text, "\"line one\\nline two\"");

    let long = SampleValue::Str("x".repeat(100));
    let spans = decorate_line(&long, 16);
    assert_eq!(spans_width(&spans), 16);
    let text: String = spans.iter().map(|s| s.content.as_str()).collect();
    assert!(text.starts_with('"'));
    assert!(text.ends_with("…\""));
}

#[test]
fn arrays_elide_with_a_visible_marker() {
    let array = SampleValue::Array((0..20i64).map(SampleValue::Int).collect());

    let spans = decorate_line(&array, 18);
    assert!(spans_width(&spans) <= 18);
    let text: String = spans.iter().map(|s| s.content.as_str()).collect();
    assert!(text.starts_with('['));
    assert!(text.ends_with("…]"), "got '{}'", text);

    // Wide enough: everything shows, no marker
    let small = SampleValue::Array(vec![SampleValue::Int(1), SampleValue::Int(2)]);
    let text: String = decorate_line(&small, 40)
        .iter()
        .map(|s| s.content.as_str())
        .collect();
    assert_eq!(text, "[1, 2]");

    let empty = SampleValue::Array(Vec::new());
    let text: String = decorate_line(&empty, 40)
        .iter()
        .map(|s| s.content.as_str())
        .collect();
    assert_eq!(text, "[]");
}

#[test]
fn hashes_render_ordered_pairs_within_budget() {
    let hash = SampleValue::Hash(vec![
        ("first".to_string(), SampleValue::Int(1)),
        ("second".to_string(), SampleValue::Str("two".to_string())),
        ("third".to_string(), SampleValue::Bool(true)),
    ]);

    let spans = decorate_line(&hash, 60);
    let text = row_text(&Row::new(spans.clone()));
    assert!(text.starts_with('{'));
    assert!(text.ends_with('}'));
    let first = text.find("first").unwrap();
    let second = text.find("second").unwrap();
    let third = text.find("third").unwrap();
    assert!(first < second && second < third);

    for limit in 0..=60 {
        assert!(spans_width(&decorate_line(&hash, limit)) <= limit);
    }
}

#[test]
fn multibyte_content_truncates_on_char_boundaries() {
    let value = SampleValue::Str("日本語のテキストがここにあります".to_string());
    for limit in 0..=20 {
        let spans = decorate_line(&value, limit);
        assert!(spans_width(&spans) <= limit);
    }

    let named = Opaque("#<Ünïcödé:0x1234 détails àvec açcents>");
    for limit in 0..=40 {
        let spans = decorate_line(&named, limit);
        assert!(spans_width(&spans) <= limit);
    }
}

#[test]
fn custom_registry_dispatch_is_total_and_pure() {
    let registry = DecoratorRegistry::new();
    let value = SampleValue::Str("hello".to_string());

    // Same registry, same inputs, same output — lookup has no side effects
    let a = registry.decorate_line(&value, 20);
    let b = registry.decorate_line(&value, 20);
    assert_eq!(a, b);

    // A default-constructed registry matches the crate-level entry points
    assert_eq!(a, decorate_line(&value, 20));
}
