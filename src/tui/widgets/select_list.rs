//! Single-select scrollable list widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Actions from list interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Selection moved or key ignored
    None,
    /// User confirmed selection
    Confirm,
    /// User backed out
    Cancel,
}

/// Single-select scrollable list.
#[derive(Debug, Clone, Default)]
pub struct SelectList {
    items: Vec<String>,
    state: ListState,
    title: String,
    /// Shown instead of the list when there are no items
    empty_message: String,
}

impl SelectList {
    /// Create a new select list with the first item selected.
    pub fn new<T: ToString>(items: Vec<T>) -> Self {
        let mut list = Self::default();
        list.set_items(items);
        list
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the text shown while the list is empty.
    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Replace the items, keeping the selection on the same position when possible.
    pub fn set_items<T: ToString>(&mut self, items: Vec<T>) {
        self.items = items.into_iter().map(|i| i.to_string()).collect();
        let selected = self.state.selected().unwrap_or(0);
        self.select(selected);
    }

    /// Select a position, clamped to the last item.
    pub fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(index.min(self.items.len() - 1)));
        }
    }

    /// Get the currently selected index.
    pub const fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Check if list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Move selection up (wraps around).
    pub fn select_previous(&mut self) {
        if let Some(current) = self.state.selected() {
            let len = self.items.len();
            self.state.select(Some((current + len - 1) % len));
        }
    }

    /// Move selection down (wraps around).
    pub fn select_next(&mut self) {
        if let Some(current) = self.state.selected() {
            self.state.select(Some((current + 1) % self.items.len()));
        }
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> SelectAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                SelectAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                SelectAction::None
            }
            KeyCode::Enter if self.state.selected().is_some() => SelectAction::Confirm,
            KeyCode::Esc => SelectAction::Cancel,
            _ => SelectAction::None,
        }
    }

    /// Render the widget.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(if self.title.is_empty() {
                String::new()
            } else {
                format!(" {} ", self.title)
            });

        if self.items.is_empty() {
            Paragraph::new(self.empty_message.as_str())
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = Some(i) == selected;
                let style = if is_selected && focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if is_selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let prefix = if is_selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(item.as_str(), style),
                ]))
            })
            .collect();

        StatefulWidget::render(List::new(items).block(block), area, buf, &mut self.state);
    }
}
