//! Centered modal popup menu widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Result of an action menu interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMenuResult {
    /// User picked the entry at this position
    Selected(usize),
    /// User cancelled (Esc)
    Cancelled,
}

/// One menu entry: a label, a dimmed hint and an optional colour.
#[derive(Debug, Clone)]
pub struct MenuItem {
    label: String,
    hint: String,
    color: Option<Color>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: hint.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Display width as "label   hint".
    fn width(&self) -> usize {
        if self.hint.is_empty() {
            self.label.width()
        } else {
            self.label.width() + 3 + self.hint.width()
        }
    }
}

/// A centered modal popup menu drawn over a dimmed background.
#[derive(Debug, Clone)]
pub struct ActionMenu {
    title: String,
    items: Vec<MenuItem>,
    selected: usize,
}

impl ActionMenu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
            selected: 0,
        }
    }

    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Handle a key event, returning a result once the interaction is complete.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ActionMenuResult> {
        let len = self.items.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                self.selected = (self.selected + len - 1) % len;
                None
            }
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                self.selected = (self.selected + 1) % len;
                None
            }
            KeyCode::Enter if len > 0 => Some(ActionMenuResult::Selected(self.selected)),
            KeyCode::Esc => Some(ActionMenuResult::Cancelled),
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn popup_size(&self) -> (u16, u16) {
        let item_width = self.items.iter().map(MenuItem::width).max().unwrap_or(10);
        let width = (item_width + 4).max(self.title.width() + 4) as u16 + 2;
        let height = self.items.len() as u16 + 2;
        (width.max(24), height.max(4))
    }

    /// Render the popup centered in `area`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(
            area,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        );

        let (width, height) = self.popup_size();
        let popup = centered_rect(width, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.title));
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, item) in self.items.iter().enumerate().take(inner.height as usize) {
            let is_selected = i == self.selected;
            let base = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let label_style = match (item.color, is_selected) {
                (Some(color), _) => base.fg(color),
                (None, true) => base.fg(Color::Cyan),
                (None, false) => base,
            };
            let prefix = if is_selected { "> " } else { "  " };

            let used = prefix.width() + item.label.width() + item.hint.width();
            let padding = (inner.width as usize).saturating_sub(used);
            let line = Line::from(vec![
                Span::styled(prefix, label_style),
                Span::styled(item.label.as_str(), label_style),
                Span::raw(" ".repeat(padding)),
                Span::styled(item.hint.as_str(), Style::default().fg(Color::DarkGray)),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}

/// Calculate a centered rectangle within the given area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn menu() -> ActionMenu {
        ActionMenu::new(
            "Document",
            vec![
                MenuItem::new("Process", "run review"),
                MenuItem::new("Remove", "drop from queue").colored(Color::Red),
                MenuItem::new("Cancel", "ESC"),
            ],
        )
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = menu();
        menu.handle_key(key(KeyCode::Up));
        assert_eq!(menu.selected(), 2);
        menu.handle_key(key(KeyCode::Down));
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_confirm_and_cancel() {
        let mut menu = menu();
        menu.handle_key(key(KeyCode::Down));
        assert_eq!(
            menu.handle_key(key(KeyCode::Enter)),
            Some(ActionMenuResult::Selected(1))
        );
        assert_eq!(
            menu.handle_key(key(KeyCode::Esc)),
            Some(ActionMenuResult::Cancelled)
        );
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(30, 10, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
    }
}
