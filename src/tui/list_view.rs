//! One board column: a filtered, store-subscribed view of the projects.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::dnd::{DropTarget, PayloadKind, TransferPayload};
use crate::model::{Project, ProjectStatus};
use crate::state::ProjectStore;

/// Interior view state, shared between the view and its store subscription
#[derive(Debug, Default)]
pub struct ListViewState {
    /// The column's subset of the last snapshot, in store order
    pub assigned: Vec<Project>,
    /// Droppable affordance, raised while an accepted drag hovers the column
    pub droppable: bool,
    /// Cursor index into `assigned`
    pub cursor: usize,
    /// First visible content row
    pub scroll_offset: usize,
}

/// A list view renders the projects of one status. It re-filters its subset
/// from every snapshot the store hands it, replacing the previous contents
/// wholesale — no diffing, one fresh card per surviving record on the next
/// draw.
pub struct ListView {
    status: ProjectStatus,
    state: Rc<RefCell<ListViewState>>,
}

impl ListView {
    pub fn new(status: ProjectStatus) -> Self {
        ListView {
            status,
            state: Rc::new(RefCell::new(ListViewState::default())),
        }
    }

    /// Register this view's store subscription.
    ///
    /// Call once per view: the store offers no unsubscribe and does not
    /// deduplicate listeners, so attaching twice would refresh the view twice
    /// per change.
    pub fn attach(&self, store: &mut ProjectStore) {
        let status = self.status;
        let state = Rc::clone(&self.state);
        store.subscribe(Box::new(move |snapshot| {
            let mut state = state.borrow_mut();
            state.assigned = snapshot
                .iter()
                .filter(|p| p.status == status)
                .cloned()
                .collect();
            if state.cursor >= state.assigned.len() {
                state.cursor = state.assigned.len().saturating_sub(1);
            }
        }));
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Column heading, e.g. "ACTIVE PROJECTS"
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.label().to_uppercase())
    }

    pub fn state(&self) -> Ref<'_, ListViewState> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, ListViewState> {
        self.state.borrow_mut()
    }

    /// The project under the cursor, if any
    pub fn selected(&self) -> Option<Project> {
        let state = self.state.borrow();
        state.assigned.get(state.cursor).cloned()
    }

    /// Move the cursor by `delta`, clamped to the list
    pub fn move_cursor(&self, delta: i32) {
        let mut state = self.state.borrow_mut();
        let len = state.assigned.len();
        if len == 0 {
            return;
        }
        state.cursor = (state.cursor as i64 + delta as i64).clamp(0, len as i64 - 1) as usize;
    }

    /// Put the cursor on the project with the given id, if present
    pub fn select_id(&self, id: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(pos) = state.assigned.iter().position(|p| p.id == id) {
            state.cursor = pos;
        }
    }
}

impl DropTarget for ListView {
    fn on_drag_over(&mut self, payload: &TransferPayload) -> bool {
        if payload.declares(PayloadKind::PlainText) {
            self.state.borrow_mut().droppable = true;
            true
        } else {
            false
        }
    }

    fn on_drag_leave(&mut self) {
        self.state.borrow_mut().droppable = false;
    }

    fn on_drop(&mut self, payload: &TransferPayload, store: &mut ProjectStore) {
        self.state.borrow_mut().droppable = false;
        // The borrow above must be released before the store notifies; this
        // view's own subscription re-borrows the same state.
        if let Some(id) = payload.text() {
            store.move_project(id, self.status);
        }
    }
}
