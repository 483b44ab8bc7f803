use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => {
            if !app.search_input.is_empty() {
                app.last_search = Some(app.search_input.clone());
            }
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Backspace) => {
            app.search_input.pop();
        }
        (modifiers, KeyCode::Char(c))
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            app.search_input.push(c);
        }
        _ => {}
    }
}
