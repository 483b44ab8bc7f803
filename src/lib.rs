//! A two-column project board with a terminal UI.
//!
//! Projects live in an observable [`state::ProjectStore`]; the two board
//! columns subscribe to it and re-render their filtered subset on every
//! change. Moving a card between columns goes through the drag-and-drop
//! protocol in [`dnd`], which is driven from the keyboard in the TUI.

pub mod cli;
pub mod dnd;
pub mod model;
pub mod state;
pub mod tui;
pub mod util;
