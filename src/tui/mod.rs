//! Terminal front end of the review session.
//!
//! Screens implement [`TuiApp`] and are driven by [`run`], which owns the
//! terminal for the duration of the loop.

pub mod event;
pub mod screens;
pub mod terminal;
pub mod widgets;

use anyhow::Result;
use ratatui::Frame;

use crate::tui::event::{EventHandler, TuiEvent};
use crate::tui::terminal::TerminalGuard;

/// How a screen finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    /// Finished with a value
    Done(T),
    /// Aborted with Ctrl+C
    Cancelled,
}

/// A screen driven by [`run`].
pub trait TuiApp {
    type Output;

    /// Reacts to one event. `Some` ends the loop.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>>;

    /// Draws the current state.
    fn render(&mut self, frame: &mut Frame);
}

/// Draws and feeds events to `app` until it finishes.
///
/// Returns `Ok(None)` when the user cancelled.
pub fn run<A: TuiApp>(mut app: A) -> Result<Option<A::Output>> {
    let mut guard = TerminalGuard::new()?;
    let events = EventHandler::default();

    loop {
        guard.terminal().draw(|frame| app.render(frame))?;

        let event = events.next()?;
        if let Some(result) = app.handle_event(&event) {
            tracing::debug!(cancelled = matches!(result, AppResult::Cancelled), "tui finished");
            return Ok(match result {
                AppResult::Done(output) => Some(output),
                AppResult::Cancelled => None,
            });
        }
    }
}
