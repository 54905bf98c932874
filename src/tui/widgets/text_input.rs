//! Single-line text input widget.
//!
//! The cursor is tracked as a character index so multi-byte input edits cleanly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single-line text input with cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position as character index (0 = before first char)
    cursor: usize,
    label: String,
    placeholder: String,
}

impl TextInput {
    /// Create an empty input with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the dimmed hint shown while empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the content and clears the input.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    fn cursor_byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert pasted text at the cursor. Line breaks are dropped.
    pub fn insert_text(&mut self, text: &str) {
        let flattened: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        let byte_idx = self.cursor_byte_index();
        self.content.insert_str(byte_idx, &flattened);
        self.cursor += flattened.chars().count();
    }

    /// Handle a key event. Returns `true` if the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.take();
                true
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                let byte_idx = self.cursor_byte_index();
                self.content.insert(byte_idx, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte_idx = self.cursor_byte_index();
                    self.content.remove(byte_idx);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let byte_idx = self.cursor_byte_index();
                    self.content.remove(byte_idx);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    /// Render the widget.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.content.is_empty() && !focused {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        if !focused {
            Paragraph::new(self.content.as_str()).render(inner, buf);
            return;
        }

        let (before, after) = self.content.split_at(self.cursor_byte_index());
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');
        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char.to_string(),
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(rest.as_str()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
