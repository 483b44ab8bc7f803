//! The observable project store — single source of truth for the board.
//!
//! The store owns the ordered record sequence and the subscriber list. Every
//! mutation (`create`, `move_project`) synchronously hands each subscriber a
//! snapshot of the full sequence, in registration order. Subscribers never
//! see the store's own buffer, only a copy, so nothing outside the store can
//! mutate a record.

use chrono::Local;

use crate::model::project::{Project, ProjectStatus};

/// A callback registered with [`ProjectStore::subscribe`].
///
/// Invoked with a snapshot of the full record sequence after every mutation.
/// A listener must not call back into the store during its own execution;
/// notification is synchronous and re-entrant mutation would recurse through
/// the listener list.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Ordered collection of projects plus the subscriber registry.
///
/// There is exactly one store per running app, constructed at startup and
/// passed by reference to every component that needs it. It is the only
/// writer of project state.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
    next_serial: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        ProjectStore::default()
    }

    /// Append a new project with status `Active` and notify all subscribers.
    ///
    /// Inputs are assumed pre-validated by the caller; the store itself
    /// accepts anything well-typed. Returns the assigned id.
    pub fn create(&mut self, title: &str, description: &str, people: u32) -> String {
        self.next_serial += 1;
        let id = format!("P-{:03}", self.next_serial);
        self.projects.push(Project::new(
            id.clone(),
            title.to_string(),
            description.to_string(),
            people,
            today_str(),
        ));
        self.notify();
        id
    }

    /// Move a project to another column.
    ///
    /// Unknown ids are ignored without notification: a drop may reference a
    /// card that no longer exists, and that is not an application error.
    /// Moving a project to the status it already has is also a silent no-op,
    /// so a redundant drop never triggers a re-render.
    pub fn move_project(&mut self, id: &str, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return;
        };
        if project.status == new_status {
            return;
        }
        project.status = new_status;
        self.notify();
    }

    /// Register a listener for future notifications.
    ///
    /// The listener is not invoked with the current state; it sees only
    /// mutations that happen after registration. There is no unsubscribe and
    /// no deduplication — registering the same view twice would render it
    /// twice per change.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Read-only view of the record sequence, in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn notify(&mut self) {
        let snapshot = self.projects.clone();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
