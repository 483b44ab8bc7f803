mod drag;
mod form;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A blocking alert intercepts all input; any key dismisses it
    if app.alert.is_some() {
        app.alert = None;
        return;
    }

    // So does the help overlay
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Form => form::handle_form(app, key),
        Mode::Drag => drag::handle_drag(app, key),
        Mode::Search => search::handle_search(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoardConfig, ProjectStatus};
    use crate::tui::app::{ACTIVE_COL, FINISHED_COL};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_demo() -> App {
        let mut app = App::new(BoardConfig::default());
        app.seed_demo();
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with_demo();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = app_with_demo();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn alert_swallows_the_dismissing_key() {
        let mut app = app_with_demo();
        app.alert = Some("Title is required".into());
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.alert.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn column_focus_and_cursor_movement() {
        let mut app = app_with_demo();
        assert_eq!(app.focus_col, ACTIVE_COL);

        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.focus_col, FINISHED_COL);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus_col, ACTIVE_COL);

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.lists[ACTIVE_COL].state().cursor, 1);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.lists[ACTIVE_COL].state().cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.lists[ACTIVE_COL].state().cursor, 1);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.lists[ACTIVE_COL].state().cursor, 0);
    }

    #[test]
    fn form_flow_creates_a_project() {
        let mut app = App::new(BoardConfig::default());
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Form);

        type_str(&mut app, "Build CLI");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "ship the tool");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "3");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.projects().len(), 1);
        assert_eq!(app.store.projects()[0].title, "Build CLI");
        assert_eq!(app.lists[ACTIVE_COL].state().assigned.len(), 1);
    }

    #[test]
    fn invalid_form_submit_raises_alert_and_stays_open() {
        let mut app = App::new(BoardConfig::default());
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_str(&mut app, "Build CLI");
        // Description and people left empty
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Form);
        assert!(app.alert.is_some());
        assert!(app.store.projects().is_empty());
        // Typed input survives for correction
        assert_eq!(app.form.title, "Build CLI");
    }

    #[test]
    fn drag_between_columns_moves_the_record() {
        let mut app = app_with_demo();
        let id = app.lists[ACTIVE_COL].selected().unwrap().id;

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.mode, Mode::Drag);
        assert!(app.lists[ACTIVE_COL].state().droppable);

        handle_key(&mut app, key(KeyCode::Right));
        assert!(!app.lists[ACTIVE_COL].state().droppable);
        assert!(app.lists[FINISHED_COL].state().droppable);

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.lists[FINISHED_COL].state().droppable);
        assert_eq!(app.focus_col, FINISHED_COL);

        let moved = app
            .store
            .projects()
            .iter()
            .find(|p| p.id == id)
            .unwrap();
        assert_eq!(moved.status, ProjectStatus::Finished);
        // Cursor follows the dropped card
        assert_eq!(app.lists[FINISHED_COL].selected().unwrap().id, id);
    }

    #[test]
    fn dropping_on_the_source_column_changes_nothing() {
        let mut app = app_with_demo();
        let before: Vec<_> = app.store.projects().to_vec();

        handle_key(&mut app, key(KeyCode::Char('m')));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.projects(), before.as_slice());
    }

    #[test]
    fn cancelled_drag_leaves_the_board_alone() {
        let mut app = app_with_demo();
        let before: Vec<_> = app.store.projects().to_vec();

        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.lists[ACTIVE_COL].state().droppable);
        assert!(!app.lists[FINISHED_COL].state().droppable);
        assert_eq!(app.store.projects(), before.as_slice());
    }

    #[test]
    fn drag_on_empty_column_is_ignored() {
        let mut app = App::new(BoardConfig::default());
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.drag.is_none());
    }

    #[test]
    fn search_commits_on_enter_and_clears_on_esc() {
        let mut app = app_with_demo();
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);

        type_str(&mut app, "cli");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.last_search.as_deref(), Some("cli"));

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.last_search.is_none());
    }

    #[test]
    fn help_overlay_toggles_and_swallows_keys() {
        let mut app = app_with_demo();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
