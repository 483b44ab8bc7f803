//! One rendered project card, and the drag source for that card.

use crate::dnd::{DragSource, DropEffect, TransferPayload};
use crate::model::Project;

/// Renders a single record from a snapshot. Cards are rebuilt from scratch
/// on every draw; the view they belong to replaces them wholesale when the
/// store notifies.
pub struct CardView {
    project: Project,
}

impl CardView {
    pub fn new(project: Project) -> Self {
        CardView { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Second card line, e.g. "3 persons assigned"
    pub fn assigned_label(&self) -> String {
        format!("{} assigned", self.project.persons_label())
    }

    /// Footer line, e.g. "added 2025-06-01"
    pub fn added_label(&self) -> String {
        format!("added {}", self.project.added)
    }
}

impl DragSource for CardView {
    fn on_drag_start(&mut self, payload: &mut TransferPayload) {
        payload.set_text(self.project.id.clone());
        payload.set_effect(DropEffect::Move);
    }
}
