//! Canvas state and the transitions that mutate it.

use crate::element::{Element, ElementId, ElementKind, ElementPatch};

/// A single state change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new element of the given kind.
    Insert(ElementKind),
    /// Move the element at `from` so it ends up at `to`.
    Reorder { from: usize, to: usize },
    /// Merge field changes into an element's payload.
    Update { id: ElementId, patch: ElementPatch },
    /// Remove an element.
    Delete(ElementId),
    /// Select an element.
    Select(ElementId),
    /// Clear the selection.
    Deselect,
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No element with the requested id.
    UnknownElement,
    /// A reorder index was outside the canvas.
    IndexOutOfBounds,
    /// A drag payload could not be decoded.
    MalformedPayload,
}

/// Outcome of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Inserted(ElementId),
    Reordered { from: usize, to: usize },
    Updated(ElementId),
    Deleted { id: ElementId, cleared_selection: bool },
    Selected(Option<ElementId>),
    /// The action was valid but changed nothing.
    Unchanged,
    Ignored(IgnoreReason),
}

impl Transition {
    /// Check if the canvas or selection changed.
    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::Unchanged | Transition::Ignored(_))
    }
}

/// The builder canvas: ordered elements plus the current selection.
///
/// Every mutation goes through [`BuilderState::apply`], which keeps the
/// selection pointing at an element that is present on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderState {
    /// Elements in render order.
    elements: Vec<Element>,
    /// Selected element, if any.
    selected: Option<ElementId>,
    /// Next id to hand out.
    next_id: ElementId,
    /// Kind being dragged from the palette, if any.
    pub(crate) dragging: Option<ElementKind>,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderState {
    /// Create an empty canvas with nothing selected.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            next_id: 1,
            dragging: None,
        }
    }

    /// Apply an action, consuming the state and returning the next one.
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    /// Apply an action in place.
    pub fn apply(&mut self, action: Action) -> Transition {
        let transition = match action {
            Action::Insert(kind) => self.apply_insert(kind),
            Action::Reorder { from, to } => self.apply_reorder(from, to),
            Action::Update { id, patch } => self.apply_update(id, &patch),
            Action::Delete(id) => self.apply_delete(id),
            Action::Select(id) => self.apply_select(id),
            Action::Deselect => {
                if self.selected.take().is_some() {
                    Transition::Selected(None)
                } else {
                    Transition::Unchanged
                }
            }
        };

        if let Transition::Ignored(reason) = transition {
            log::debug!("Ignored builder action: {:?}", reason);
        }
        transition
    }

    fn apply_insert(&mut self, kind: ElementKind) -> Transition {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.push(Element::new(id, kind));
        log::debug!("Inserted {} element {}", kind, id);
        Transition::Inserted(id)
    }

    fn apply_reorder(&mut self, from: usize, to: usize) -> Transition {
        let len = self.elements.len();
        if from >= len || to >= len {
            return Transition::Ignored(IgnoreReason::IndexOutOfBounds);
        }
        if from == to {
            return Transition::Unchanged;
        }
        let element = self.elements.remove(from);
        self.elements.insert(to, element);
        Transition::Reordered { from, to }
    }

    fn apply_update(&mut self, id: ElementId, patch: &ElementPatch) -> Transition {
        let Some(element) = self.elements.iter_mut().find(|e| e.id() == id) else {
            return Transition::Ignored(IgnoreReason::UnknownElement);
        };
        if element.apply(patch) {
            Transition::Updated(id)
        } else {
            Transition::Unchanged
        }
    }

    fn apply_delete(&mut self, id: ElementId) -> Transition {
        let Some(index) = self.position(id) else {
            return Transition::Ignored(IgnoreReason::UnknownElement);
        };
        self.elements.remove(index);
        let cleared_selection = self.selected == Some(id);
        if cleared_selection {
            self.selected = None;
        }
        log::debug!("Deleted element {}", id);
        Transition::Deleted { id, cleared_selection }
    }

    fn apply_select(&mut self, id: ElementId) -> Transition {
        let target = self.position(id).map(|_| id);
        if target == self.selected {
            return Transition::Unchanged;
        }
        self.selected = target;
        Transition::Selected(target)
    }

    /// Append a new element. Returns the new element's id.
    pub fn insert(&mut self, kind: ElementKind) -> ElementId {
        let id = self.next_id;
        self.apply(Action::Insert(kind));
        id
    }

    /// Move the element at `from` to `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Transition {
        self.apply(Action::Reorder { from, to })
    }

    /// Merge field changes into an element.
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> Transition {
        self.apply(Action::Update { id, patch })
    }

    /// Remove an element, clearing the selection if it pointed at it.
    pub fn delete(&mut self, id: ElementId) -> Transition {
        self.apply(Action::Delete(id))
    }

    /// Select an element. Unknown ids clear the selection.
    pub fn select(&mut self, id: ElementId) -> Transition {
        self.apply(Action::Select(id))
    }

    /// Clear the selection.
    pub fn deselect(&mut self) -> Transition {
        self.apply(Action::Deselect)
    }

    /// Elements in render order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The selected element.
    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Get the index of an element.
    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Kind currently being dragged from the palette.
    pub fn drag_in_progress(&self) -> Option<ElementKind> {
        self.dragging
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Field, Payload};
    use std::collections::HashSet;

    fn ids(state: &BuilderState) -> Vec<ElementId> {
        state.elements().iter().map(|e| e.id()).collect()
    }

    fn kinds(state: &BuilderState) -> Vec<ElementKind> {
        state.elements().iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = BuilderState::new();
        assert!(state.is_empty());
        assert!(state.selected().is_none());
        assert!(state.drag_in_progress().is_none());
    }

    #[test]
    fn test_insert_text() {
        let mut state = BuilderState::new();
        let id = state.insert(ElementKind::Text);

        assert_eq!(state.len(), 1);
        let element = &state.elements()[0];
        assert_eq!(element.id(), id);
        assert_eq!(element.kind(), ElementKind::Text);
        assert_eq!(element.value(), "Edit me");
    }

    #[test]
    fn test_insert_appends_with_distinct_ids() {
        let mut state = BuilderState::new();
        let sequence = [
            ElementKind::Button,
            ElementKind::Text,
            ElementKind::Image,
            ElementKind::Text,
            ElementKind::Button,
        ];
        for (n, kind) in sequence.iter().enumerate() {
            let before = state.elements().to_vec();
            let id = state.insert(*kind);
            assert_eq!(state.len(), n + 1);
            assert_eq!(state.elements().last().map(|e| e.id()), Some(id));
            assert_eq!(&state.elements()[..n], &before[..]);
        }

        let unique: HashSet<_> = ids(&state).into_iter().collect();
        assert_eq!(unique.len(), sequence.len());
        assert_eq!(kinds(&state), sequence.to_vec());
    }

    #[test]
    fn test_ids_count_from_one() {
        let mut state = BuilderState::new();
        assert_eq!(state.insert(ElementKind::Text), 1);
        assert_eq!(state.insert(ElementKind::Button), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut state = BuilderState::new();
        let first = state.insert(ElementKind::Text);
        state.delete(first);
        let second = state.insert(ElementKind::Text);
        assert_ne!(first, second);
    }

    #[test]
    fn test_reorder_image_button() {
        let mut state = BuilderState::new();
        state.insert(ElementKind::Image);
        state.insert(ElementKind::Button);

        assert_eq!(state.reorder(0, 1), Transition::Reordered { from: 0, to: 1 });
        assert_eq!(kinds(&state), vec![ElementKind::Button, ElementKind::Image]);
    }

    #[test]
    fn test_reorder_target_counts_without_source() {
        let mut state = BuilderState::new();
        let a = state.insert(ElementKind::Text);
        let b = state.insert(ElementKind::Image);
        let c = state.insert(ElementKind::Button);
        let d = state.insert(ElementKind::Text);

        state.reorder(0, 2);
        assert_eq!(ids(&state), vec![b, c, a, d]);

        state.reorder(3, 0);
        assert_eq!(ids(&state), vec![d, b, c, a]);
    }

    #[test]
    fn test_reorder_is_permutation() {
        let mut state = BuilderState::new();
        for kind in ElementKind::ALL.iter().cycle().take(5) {
            state.insert(*kind);
        }
        let mut expected = ids(&state);
        expected.sort_unstable();

        for from in 0..5 {
            for to in 0..5 {
                state.reorder(from, to);
                let mut after = ids(&state);
                after.sort_unstable();
                assert_eq!(after, expected);
            }
        }
    }

    #[test]
    fn test_reorder_same_index_is_identity() {
        let mut state = BuilderState::new();
        state.insert(ElementKind::Text);
        state.insert(ElementKind::Image);
        let before = state.clone();

        assert_eq!(state.reorder(1, 1), Transition::Unchanged);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reorder_out_of_bounds() {
        let mut state = BuilderState::new();
        state.insert(ElementKind::Text);
        state.insert(ElementKind::Image);
        let before = state.clone();

        assert_eq!(
            state.reorder(2, 0),
            Transition::Ignored(IgnoreReason::IndexOutOfBounds)
        );
        assert_eq!(
            state.reorder(0, 5),
            Transition::Ignored(IgnoreReason::IndexOutOfBounds)
        );
        assert_eq!(state, before);

        let mut empty = BuilderState::new();
        assert!(!empty.reorder(0, 0).is_change());
    }

    #[test]
    fn test_update_refreshes_selection() {
        let mut state = BuilderState::new();
        let id = state.insert(ElementKind::Text);
        assert_eq!(id, 1);
        state.select(id);

        assert_eq!(
            state.update(id, ElementPatch::new().with_content("Hello")),
            Transition::Updated(id)
        );
        assert_eq!(state.selected().map(|e| e.value()), Some("Hello"));
        assert_eq!(state.elements()[0].value(), "Hello");
    }

    #[test]
    fn test_update_keeps_kind_and_id() {
        let mut state = BuilderState::new();
        let text = state.insert(ElementKind::Text);
        let image = state.insert(ElementKind::Image);

        // Fields belonging to other kinds are dropped
        let patch = ElementPatch::new().with_label("Nope").with_src("cat.png");
        assert_eq!(state.update(image, patch.clone()), Transition::Updated(image));
        assert_eq!(state.update(text, patch), Transition::Unchanged);

        let image_el = state.get(image).unwrap();
        assert_eq!(image_el.id(), image);
        assert_eq!(image_el.payload(), &Payload::Image { src: "cat.png".to_string() });
        assert_eq!(state.get(text).unwrap().value(), "Edit me");
        assert_eq!(kinds(&state), vec![ElementKind::Text, ElementKind::Image]);
    }

    #[test]
    fn test_update_touches_one_element() {
        let mut state = BuilderState::new();
        let a = state.insert(ElementKind::Button);
        let b = state.insert(ElementKind::Button);

        state.update(b, ElementPatch::field(Field::Label, "Submit"));
        assert_eq!(state.get(a).unwrap().value(), "Click me");
        assert_eq!(state.get(b).unwrap().value(), "Submit");
        assert_eq!(ids(&state), vec![a, b]);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut state = BuilderState::new();
        state.insert(ElementKind::Text);
        let before = state.clone();

        assert_eq!(
            state.update(42, ElementPatch::new().with_content("x")),
            Transition::Ignored(IgnoreReason::UnknownElement)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut state = BuilderState::new();
        state.insert(ElementKind::Text);
        let button = state.insert(ElementKind::Button);
        assert_eq!(button, 2);
        state.select(button);

        assert_eq!(
            state.delete(button),
            Transition::Deleted { id: button, cleared_selection: true }
        );
        assert!(state.get(button).is_none());
        assert_eq!(state.len(), 1);
        assert!(state.selected().is_none());
        assert!(state.selected_id().is_none());
    }

    #[test]
    fn test_delete_only_element() {
        let mut state = BuilderState::new();
        let id = state.insert(ElementKind::Button);
        state.select(id);
        state.delete(id);

        assert!(state.is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut state = BuilderState::new();
        let a = state.insert(ElementKind::Text);
        let b = state.insert(ElementKind::Image);
        state.select(a);

        assert_eq!(
            state.delete(b),
            Transition::Deleted { id: b, cleared_selection: false }
        );
        assert_eq!(state.selected_id(), Some(a));
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut state = BuilderState::new();
        let a = state.insert(ElementKind::Text);
        state.select(a);
        let before = state.clone();

        assert_eq!(
            state.delete(99),
            Transition::Ignored(IgnoreReason::UnknownElement)
        );
        assert_eq!(state, before);

        // Deleting twice is a no-op the second time
        state.delete(a);
        let after_first = state.clone();
        assert!(!state.delete(a).is_change());
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_select_unknown_clears() {
        let mut state = BuilderState::new();
        let a = state.insert(ElementKind::Text);
        state.select(a);
        assert_eq!(state.selected_id(), Some(a));

        assert_eq!(state.select(a), Transition::Unchanged);
        assert_eq!(state.select(7), Transition::Selected(None));
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_deselect() {
        let mut state = BuilderState::new();
        let a = state.insert(ElementKind::Image);
        state.select(a);

        assert_eq!(state.deselect(), Transition::Selected(None));
        assert_eq!(state.deselect(), Transition::Unchanged);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_reduce() {
        let state = BuilderState::new()
            .reduce(Action::Insert(ElementKind::Image))
            .reduce(Action::Insert(ElementKind::Button))
            .reduce(Action::Reorder { from: 0, to: 1 })
            .reduce(Action::Select(2))
            .reduce(Action::Update {
                id: 2,
                patch: ElementPatch::new().with_label("Go"),
            });

        assert_eq!(kinds(&state), vec![ElementKind::Button, ElementKind::Image]);
        assert_eq!(state.selected().map(|e| e.value()), Some("Go"));
    }
}
