//! Span and row primitives
//!
//! A [`Span`] is one styled fragment of text plus optional left/right margins.
//! A [`Row`] is an ordered sequence of spans forming one rendered terminal
//! line. Both are plain data: the pane compositor consumes them verbatim and
//! resolves the symbolic [`StyleTag`] against its theme.
//!
//! # Width accounting
//!
//! All widths are measured in Unicode scalar values (`char`s), never bytes.
//! A span's width is `content chars + margin_left + margin_right`; a row's
//! width is the sum of its span widths. The decorators guarantee that a row
//! never exceeds the line limit it was rendered under, so the compositor can
//! place rows without re-measuring.

/// Symbolic style tag attached to a span.
///
/// The set is closed: decorators pick tags from this enum and the UI theme
/// maps each tag to a concrete color/modifier. The engine itself never
/// resolves colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Default foreground text
    TextPrimary,
    /// Secondary information (object signatures, field names, delimiters)
    TextSecondary,
    /// De-emphasized text (bullets, elision markers, separators)
    TextDim,
    /// String literals
    String,
    /// Numeric literals
    Number,
    /// Language keywords (true/false/nil)
    Keyword,
    /// Inline error placeholders
    Error,
}

/// One styled text fragment with margin metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub margin_left: usize,
    pub margin_right: usize,
    pub style: StyleTag,
}

impl Span {
    /// Create a span with no margins
    pub fn new(content: impl Into<String>, style: StyleTag) -> Self {
        Span {
            content: content.into(),
            margin_left: 0,
            margin_right: 0,
            style,
        }
    }

    /// Create a span with explicit left/right margins
    pub fn with_margin(
        content: impl Into<String>,
        style: StyleTag,
        margin_left: usize,
        margin_right: usize,
    ) -> Self {
        Span {
            content: content.into(),
            margin_left,
            margin_right,
            style,
        }
    }

    /// Width in terminal cells: content chars plus both margins
    pub fn width(&self) -> usize {
        self.content.chars().count() + self.margin_left + self.margin_right
    }
}

/// One rendered terminal line: an ordered sequence of spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub spans: Vec<Span>,
}

impl Row {
    pub fn new(spans: Vec<Span>) -> Self {
        Row { spans }
    }

    /// Total width of all spans, margins included
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }
}
