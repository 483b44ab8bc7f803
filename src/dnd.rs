//! Drag-and-drop transition protocol.
//!
//! Two capability traits connect a card being dragged to the column it lands
//! in: a [`DragSource`] writes the record id into a [`TransferPayload`] when
//! the gesture starts, and a [`DropTarget`] inspects the payload, raises a
//! droppable affordance while hovered, and asks the store to move the record
//! on drop. [`DragGesture`] tracks the phase of one gesture from pick-up to
//! drop or cancel. All of this is transient UI state; none of it survives
//! the gesture, and a rejected payload simply means nothing happens.

use crate::state::ProjectStore;

/// Payload types a drag can declare. The board only ever transfers card ids
/// as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    PlainText,
}

/// Transfer effect the source allows for the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// The transient carrier of a record id between drag source and drop target
#[derive(Debug, Clone, Default)]
pub struct TransferPayload {
    data: Option<(PayloadKind, String)>,
    effect: DropEffect,
}

impl TransferPayload {
    pub fn new() -> Self {
        TransferPayload::default()
    }

    /// Declare a plain-text payload carrying `data`
    pub fn set_text(&mut self, data: impl Into<String>) {
        self.data = Some((PayloadKind::PlainText, data.into()));
    }

    pub fn set_effect(&mut self, effect: DropEffect) {
        self.effect = effect;
    }

    pub fn effect(&self) -> DropEffect {
        self.effect
    }

    /// Whether the payload declares the given kind, without reading the data
    pub fn declares(&self, kind: PayloadKind) -> bool {
        matches!(&self.data, Some((k, _)) if *k == kind)
    }

    /// The payload data, only when it was declared as plain text
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            Some((PayloadKind::PlainText, data)) => Some(data),
            None => None,
        }
    }
}

/// Capability of a card that can be picked up
pub trait DragSource {
    /// Write the record id into the payload and mark the allowed effect
    fn on_drag_start(&mut self, payload: &mut TransferPayload);

    /// Hook for visual cleanup when the gesture ends; no required action
    fn on_drag_end(&mut self, _payload: &mut TransferPayload) {}
}

/// Capability of a column that can accept a dropped card
pub trait DropTarget {
    /// Inspect the payload; accept it (returning `true`) and show the
    /// droppable affordance when the declared type is plain text
    fn on_drag_over(&mut self, payload: &TransferPayload) -> bool;

    /// Remove the droppable affordance
    fn on_drag_leave(&mut self);

    /// Extract the id from the payload and move the record into this target
    fn on_drop(&mut self, payload: &TransferPayload, store: &mut ProjectStore);
}

/// Phase of the current gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Picked up, not over an accepting target
    Dragging,
    /// Hovering a target that accepted the payload
    OverTarget,
}

/// One drag gesture, from pick-up to drop or cancel.
///
/// Owned jointly by the source and whichever target is hovered; never
/// persisted.
#[derive(Debug, Default)]
pub struct DragGesture {
    payload: TransferPayload,
    phase: DragPhase,
}

impl DragGesture {
    /// Pick up: the source fills in the payload
    pub fn begin(source: &mut dyn DragSource) -> Self {
        let mut payload = TransferPayload::new();
        source.on_drag_start(&mut payload);
        DragGesture {
            payload,
            phase: DragPhase::Dragging,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn payload(&self) -> &TransferPayload {
        &self.payload
    }

    /// Hover a target. Returns whether it accepted the payload; the phase
    /// moves to `OverTarget` only on acceptance.
    pub fn drag_over(&mut self, target: &mut dyn DropTarget) -> bool {
        if target.on_drag_over(&self.payload) {
            self.phase = DragPhase::OverTarget;
            true
        } else {
            false
        }
    }

    /// Leave the hovered target: affordance cleared, back to `Dragging`
    pub fn drag_leave(&mut self, target: &mut dyn DropTarget) {
        target.on_drag_leave();
        if self.phase == DragPhase::OverTarget {
            self.phase = DragPhase::Dragging;
        }
    }

    /// Drop on the hovered target, then let the source clean up
    pub fn drop_on(
        &mut self,
        target: &mut dyn DropTarget,
        source: &mut dyn DragSource,
        store: &mut ProjectStore,
    ) {
        target.on_drop(&self.payload, store);
        source.on_drag_end(&mut self.payload);
        self.phase = DragPhase::Idle;
    }

    /// Abandon the gesture without dropping
    pub fn cancel(&mut self, source: &mut dyn DragSource) {
        source.on_drag_end(&mut self.payload);
        self.phase = DragPhase::Idle;
    }
}
