//! Terminal event polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Tick interval when no input arrives.
const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Events delivered to a [`TuiApp`](super::TuiApp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press (release and repeat events are filtered out)
    Key(KeyEvent),
    /// Bracketed paste content
    Paste(String),
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
    /// No input within the tick interval
    Tick,
}

/// Blocking event source with a tick fallback.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

impl EventHandler {
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, or returns `Tick` after the tick interval.
    pub fn next(&self) -> Result<TuiEvent> {
        loop {
            if !event::poll(self.tick_rate)? {
                return Ok(TuiEvent::Tick);
            }
            if let Some(event) = Self::translate(event::read()?) {
                return Ok(event);
            }
        }
    }

    fn translate(event: Event) -> Option<TuiEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
            Event::Paste(text) => Some(TuiEvent::Paste(text)),
            Event::Resize(cols, rows) => Some(TuiEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}
