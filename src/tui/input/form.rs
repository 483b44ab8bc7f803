use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            // Close without submitting; typed values are kept for next time
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => match app.form.submit(&mut app.store) {
            Ok(_) => app.mode = Mode::Navigate,
            Err(message) => app.alert = Some(message),
        },
        (_, KeyCode::Tab) | (_, KeyCode::Down) => app.form.focus_next(),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => app.form.focus_prev(),
        (_, KeyCode::Backspace) => app.form.backspace(),
        (_, KeyCode::Delete) => app.form.delete(),
        (_, KeyCode::Left) => app.form.move_left(),
        (_, KeyCode::Right) => app.form.move_right(),
        (_, KeyCode::Home) => app.form.move_home(),
        (_, KeyCode::End) => app.form.move_end(),
        (modifiers, KeyCode::Char(c))
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            app.form.insert_char(c);
        }
        _ => {}
    }
}
