//! Reusable TUI widgets.

mod action_menu;
mod select_list;
mod text_input;

pub use action_menu::{ActionMenu, ActionMenuResult, MenuItem};
pub use select_list::{SelectAction, SelectList};
pub use text_input::TextInput;
