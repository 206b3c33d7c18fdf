use crate::render::StyleTag;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub secondary: Color, // Object signatures, delimiters, field names
    pub dim: Color,       // Bullets, separators, elision markers
    pub string: Color,    // Orange
    pub number: Color,    // Orange
    pub keyword: Color,   // Blue
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    secondary: Color::Rgb(186, 194, 222),
    dim: Color::Rgb(108, 112, 134),
    string: Color::Rgb(250, 179, 135),
    number: Color::Rgb(250, 179, 135),
    keyword: Color::Rgb(137, 180, 250),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
};

impl Theme {
    /// Resolve a symbolic style tag into a concrete ratatui style
    pub fn style_for(&self, tag: StyleTag) -> Style {
        match tag {
            StyleTag::TextPrimary => Style::default().fg(self.fg),
            StyleTag::TextSecondary => Style::default().fg(self.secondary),
            StyleTag::TextDim => Style::default().fg(self.dim).add_modifier(Modifier::DIM),
            StyleTag::String => Style::default().fg(self.string),
            StyleTag::Number => Style::default().fg(self.number),
            StyleTag::Keyword => Style::default().fg(self.keyword),
            StyleTag::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
        }
    }
}
