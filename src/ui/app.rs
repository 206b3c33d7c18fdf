//! Demo TUI application state and event loop
//!
//! Drives the decoration engine the way a debugger's variables pane would: a
//! handful of sample values, one inspected at a time, decorated into the
//! exact budgets the pane has to offer on this frame. Resize the terminal
//! and the next frame re-decorates under the new budgets.

use crate::decorators::DecoratorRegistry;
use crate::inspect::SampleValue;
use crate::ui::panes::{render_variables_pane, VariablesScrollState};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The demo application state
pub struct App {
    registry: DecoratorRegistry,
    entries: Vec<(String, SampleValue)>,
    selected: usize,
    scroll: VariablesScrollState,
    should_quit: bool,
}

impl App {
    /// Create an app inspecting the given labelled values
    pub fn new(entries: Vec<(String, SampleValue)>) -> Self {
        App {
            registry: DecoratorRegistry::new(),
            entries,
            selected: 0,
            scroll: VariablesScrollState { offset: 0 },
            should_quit: false,
        }
    }

    /// Run the TUI event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        let pane_area = chunks[0];

        // Budgets come from the pane geometry: borders take two columns and
        // two rows
        let content_width = pane_area.width.saturating_sub(2) as usize;
        let row_budget = pane_area.height.saturating_sub(2).max(2) as usize;

        let (title, rows) = match self.entries.get(self.selected) {
            Some((label, value)) => (
                label.clone(),
                self.registry
                    .decorate_tree(value, content_width, row_budget, content_width),
            ),
            None => (String::from("variables"), Vec::new()),
        };

        render_variables_pane(
            frame,
            pane_area,
            &title,
            &rows,
            true,
            &mut self.scroll,
        );

        let hints = Line::from(vec![
            Span::styled(
                " q quit │ tab next value │ j/k scroll ",
                Style::default().fg(DEFAULT_THEME.dim),
            ),
            Span::styled(
                format!(
                    "[{}/{}]",
                    self.selected + 1,
                    self.entries.len().max(1)
                ),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(hints), chunks[1]);
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1) % self.entries.len();
                    self.scroll.offset = 0;
                }
            }
            KeyCode::BackTab | KeyCode::Left => {
                if !self.entries.is_empty() {
                    self.selected =
                        (self.selected + self.entries.len() - 1) % self.entries.len();
                    self.scroll.offset = 0;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll.offset = self.scroll.offset.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll.offset = self.scroll.offset.saturating_sub(1);
            }
            _ => {}
        }
    }
}
