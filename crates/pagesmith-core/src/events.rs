//! UI events delivered by the presentation layer.

use crate::builder::{Action, BuilderState, IgnoreReason, Transition};
use crate::element::{ElementId, ElementKind, ElementPatch, Field};
use crate::payload::DragPayload;

/// An event from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderEvent {
    /// A palette entry started being dragged.
    PaletteDragStart(ElementKind),
    /// A drag ended outside the canvas.
    DragCancelled,
    /// Something was dropped on the canvas.
    ///
    /// `target` is the index of the element the drop landed on, or `None`
    /// for empty canvas space.
    CanvasDrop {
        payload: DragPayload,
        target: Option<usize>,
    },
    /// An element on the canvas was clicked.
    ElementClick(ElementId),
    /// Empty canvas space was clicked.
    CanvasBackgroundClick,
    /// An edit-panel field changed.
    FieldChange {
        id: ElementId,
        field: Field,
        value: String,
    },
    /// The delete button was pressed for an element.
    DeleteClick(ElementId),
}

impl BuilderEvent {
    /// Translate into a state action. Returns `None` for events that only
    /// touch drag tracking.
    pub fn into_action(self, len: usize) -> Option<Action> {
        match self {
            BuilderEvent::PaletteDragStart(_) | BuilderEvent::DragCancelled => None,
            BuilderEvent::CanvasDrop { payload, target } => Some(match payload {
                DragPayload::Palette { kind } => Action::Insert(kind),
                DragPayload::CanvasItem { index } => Action::Reorder {
                    from: index,
                    to: target.unwrap_or_else(|| len.saturating_sub(1)),
                },
            }),
            BuilderEvent::ElementClick(id) => Some(Action::Select(id)),
            BuilderEvent::CanvasBackgroundClick => Some(Action::Deselect),
            BuilderEvent::FieldChange { id, field, value } => Some(Action::Update {
                id,
                patch: ElementPatch::field(field, value),
            }),
            BuilderEvent::DeleteClick(id) => Some(Action::Delete(id)),
        }
    }
}

impl BuilderState {
    /// Handle a presentation-layer event.
    pub fn handle_event(&mut self, event: BuilderEvent) -> Transition {
        match &event {
            BuilderEvent::PaletteDragStart(kind) => {
                log::debug!("Palette drag started: {}", kind);
                self.dragging = Some(*kind);
            }
            BuilderEvent::DragCancelled | BuilderEvent::CanvasDrop { .. } => {
                self.dragging = None;
            }
            _ => {}
        }

        match event.into_action(self.len()) {
            Some(action) => self.apply(action),
            None => Transition::Unchanged,
        }
    }

    /// Handle a batch of events in delivery order.
    pub fn handle_events(
        &mut self,
        events: impl IntoIterator<Item = BuilderEvent>,
    ) -> Vec<Transition> {
        events.into_iter().map(|event| self.handle_event(event)).collect()
    }

    /// Handle a drop whose payload arrives in its encoded string form.
    pub fn handle_raw_drop(&mut self, data: &str, target: Option<usize>) -> Transition {
        match DragPayload::decode(data) {
            Ok(payload) => self.handle_event(BuilderEvent::CanvasDrop { payload, target }),
            Err(e) => {
                log::debug!("Dropping malformed payload {:?}: {}", data, e);
                self.dragging = None;
                Transition::Ignored(IgnoreReason::MalformedPayload)
            }
        }
    }
}
