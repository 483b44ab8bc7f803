use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, COLUMNS, Mode};

use super::drag;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Tab) => {
            app.focus_col = (app.focus_col + 1) % COLUMNS;
        }
        (_, KeyCode::Left | KeyCode::Char('h')) => {
            app.focus_col = app.focus_col.saturating_sub(1);
        }
        (_, KeyCode::Right | KeyCode::Char('l')) => {
            app.focus_col = (app.focus_col + 1).min(COLUMNS - 1);
        }
        (_, KeyCode::Up | KeyCode::Char('k')) => {
            app.focused_list().move_cursor(-1);
        }
        (_, KeyCode::Down | KeyCode::Char('j')) => {
            app.focused_list().move_cursor(1);
        }
        (_, KeyCode::Char('g') | KeyCode::Home) => {
            app.focused_list().move_cursor(i32::MIN);
        }
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.focused_list().move_cursor(i32::MAX);
        }
        (_, KeyCode::Char('a')) => {
            app.mode = Mode::Form;
        }
        (_, KeyCode::Char(' ') | KeyCode::Char('m')) => {
            drag::start_drag(app);
        }
        (_, KeyCode::Char('/')) => {
            app.search_input.clear();
            app.mode = Mode::Search;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }
        (_, KeyCode::Esc) => {
            app.last_search = None;
        }
        _ => {}
    }
}
