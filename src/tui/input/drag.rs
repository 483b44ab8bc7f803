use crossterm::event::{KeyCode, KeyEvent};

use crate::dnd::DragGesture;
use crate::tui::app::{App, COLUMNS, DragState, Mode};
use crate::tui::card_view::CardView;

/// Pick up the card under the cursor (no-op on an empty column). Picking up
/// immediately hovers the source column, so its affordance shows where the
/// card would land if dropped in place.
pub(super) fn start_drag(app: &mut App) {
    let col = app.focus_col;
    let Some(project) = app.lists[col].selected() else {
        return;
    };

    let mut source = CardView::new(project);
    let gesture = DragGesture::begin(&mut source);
    let mut drag = DragState {
        source,
        from_col: col,
        over_col: None,
        gesture,
    };
    hover_column(app, &mut drag, col);
    app.drag = Some(drag);
    app.mode = Mode::Drag;
}

pub(super) fn handle_drag(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => confirm_drop(app),
        KeyCode::Esc => cancel_drag(app),
        KeyCode::Left | KeyCode::Char('h') => hover_towards(app, -1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => hover_towards(app, 1),
        _ => {}
    }
}

/// Shift the hovered column by `direction`, leaving the previous target
fn hover_towards(app: &mut App, direction: i32) {
    let Some(mut drag) = app.drag.take() else {
        return;
    };
    let current = drag.over_col.unwrap_or(drag.from_col);
    let next = (current as i64 + direction as i64).clamp(0, COLUMNS as i64 - 1) as usize;
    if next != current {
        hover_column(app, &mut drag, next);
    }
    app.drag = Some(drag);
}

fn hover_column(app: &mut App, drag: &mut DragState, col: usize) {
    if let Some(prev) = drag.over_col.take() {
        drag.gesture.drag_leave(&mut app.lists[prev]);
    }
    if drag.gesture.drag_over(&mut app.lists[col]) {
        drag.over_col = Some(col);
    }
}

fn confirm_drop(app: &mut App) {
    let Some(mut drag) = app.drag.take() else {
        return;
    };
    if let Some(col) = drag.over_col {
        drag.gesture
            .drop_on(&mut app.lists[col], &mut drag.source, &mut app.store);
        app.focus_col = col;
        // Follow the card to where it landed
        app.lists[col].select_id(&drag.source.project().id);
    } else {
        drag.gesture.cancel(&mut drag.source);
    }
    app.mode = Mode::Navigate;
}

fn cancel_drag(app: &mut App) {
    let Some(mut drag) = app.drag.take() else {
        return;
    };
    if let Some(col) = drag.over_col.take() {
        drag.gesture.drag_leave(&mut app.lists[col]);
    }
    drag.gesture.cancel(&mut drag.source);
    app.mode = Mode::Navigate;
}
