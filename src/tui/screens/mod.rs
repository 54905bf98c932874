//! Full-screen TUI applications.

mod session;

pub use session::{run_session, SessionScreen};
