use crate::gradient::{GradientState, Marker, MarkerKind, MarkerList};

/// Names one stop by channel and index into the current sorted list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarkerRef {
    pub kind: MarkerKind,
    pub index: usize,
}

impl MarkerRef {
    #[inline]
    pub const fn new(kind: MarkerKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Per-editor interaction state, owned by the host across frames.
///
/// Indices are kept pointing at the same stops whenever the editor reorders
/// a list. Hosts that reorder or remove stops themselves should go through
/// [`remove_selected`](Self::remove_selected) or call [`clear`](Self::clear).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TemporaryState {
    /// Highlighted stop; survives button release.
    pub selected: Option<MarkerRef>,
    /// Stop following the pointer; cleared when the primary button is released.
    pub dragging: Option<MarkerRef>,
}

impl TemporaryState {
    #[inline]
    pub fn is_selected(&self, kind: MarkerKind, index: usize) -> bool {
        self.selected == Some(MarkerRef::new(kind, index))
    }

    #[inline]
    pub fn is_dragging(&self, kind: MarkerKind, index: usize) -> bool {
        self.dragging == Some(MarkerRef::new(kind, index))
    }

    #[inline]
    pub fn dragging_kind(&self) -> Option<MarkerKind> {
        self.dragging.map(|m| m.kind)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Removes the selected stop from `state`.
    ///
    /// Clears the selection, and the drag if it targets the same channel.
    /// Returns `false` when nothing was selected or the index is stale.
    pub fn remove_selected(&mut self, state: &mut GradientState) -> bool {
        let Some(sel) = self.selected.take() else {
            return false;
        };
        if self.dragging_kind() == Some(sel.kind) {
            self.dragging = None;
        }
        let removed = match sel.kind {
            MarkerKind::Color => state.remove_color_marker(sel.index),
            MarkerKind::Alpha => state.remove_alpha_marker(sel.index),
        };
        if removed {
            log::debug!("removed {:?} stop {}", sel.kind, sel.index);
        }
        removed
    }

    /// Sorts `list` and keeps the references into it pointing at the same stops.
    ///
    /// Only references of the list's own channel are remapped.
    pub(crate) fn resort<T: Marker>(&mut self, list: &mut MarkerList<T>) {
        let mut selected = index_of(self.selected, T::KIND);
        let mut dragging = index_of(self.dragging, T::KIND);
        list.sort_and_remap(&mut selected, &mut dragging);
        if let Some(index) = selected {
            self.selected = Some(MarkerRef::new(T::KIND, index));
        }
        if let Some(index) = dragging {
            self.dragging = Some(MarkerRef::new(T::KIND, index));
        }
    }

    /// Shifts same-channel references at or after `index` right by one, as
    /// an insertion at `index` does to the stops they name.
    pub(crate) fn note_inserted(&mut self, kind: MarkerKind, index: usize) {
        for r in [&mut self.selected, &mut self.dragging].into_iter().flatten() {
            if r.kind == kind && r.index >= index {
                r.index += 1;
            }
        }
    }
}

fn index_of(r: Option<MarkerRef>, kind: MarkerKind) -> Option<usize> {
    r.filter(|m| m.kind == kind).map(|m| m.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{AlphaMarker, ColorMarker};

    fn sample_state() -> GradientState {
        GradientState::from_markers(
            [
                ColorMarker::new(0.0, [1.0, 0.0, 0.0], 1.0),
                ColorMarker::new(0.5, [0.0, 1.0, 0.0], 2.0),
                ColorMarker::new(1.0, [0.0, 0.0, 1.0], 1.0),
            ],
            [AlphaMarker::new(0.0, 1.0), AlphaMarker::new(1.0, 0.0)],
        )
    }

    // ── removal ───────────────────────────────────────────────────────────

    #[test]
    fn remove_selected_color() {
        let mut state = sample_state();
        let mut temp = TemporaryState {
            selected: Some(MarkerRef::new(MarkerKind::Color, 1)),
            dragging: Some(MarkerRef::new(MarkerKind::Color, 1)),
        };
        assert!(temp.remove_selected(&mut state));
        assert_eq!(state.color_count(), 2);
        assert_eq!(state.colors()[1].position, 1.0);
        assert_eq!(temp, TemporaryState::default());
    }

    #[test]
    fn remove_selected_keeps_other_channel_drag() {
        let mut state = sample_state();
        let drag = Some(MarkerRef::new(MarkerKind::Color, 0));
        let mut temp = TemporaryState { selected: Some(MarkerRef::new(MarkerKind::Alpha, 1)), dragging: drag };
        assert!(temp.remove_selected(&mut state));
        assert_eq!(state.alpha_count(), 1);
        assert_eq!(temp.dragging, drag);
    }

    #[test]
    fn remove_without_selection_or_stale_index() {
        let mut state = sample_state();
        let mut temp = TemporaryState::default();
        assert!(!temp.remove_selected(&mut state));

        temp.selected = Some(MarkerRef::new(MarkerKind::Alpha, 5));
        assert!(!temp.remove_selected(&mut state));
        assert_eq!(temp.selected, None);
        assert_eq!(state, sample_state());
    }

    // ── reorder ───────────────────────────────────────────────────────────

    #[test]
    fn resort_follows_dragged_stop() {
        let mut state = sample_state();
        let mut temp = TemporaryState {
            selected: Some(MarkerRef::new(MarkerKind::Color, 0)),
            dragging: Some(MarkerRef::new(MarkerKind::Color, 0)),
        };
        if let Some(m) = state.color_marker_mut(0) {
            m.position = 0.75;
        }
        temp.resort(state.color_list_mut());

        assert_eq!(temp.selected, Some(MarkerRef::new(MarkerKind::Color, 1)));
        assert_eq!(temp.dragging, Some(MarkerRef::new(MarkerKind::Color, 1)));
        assert_eq!(state.colors()[1].color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn resort_leaves_other_channel_selection() {
        let mut state = sample_state();
        let mut temp = TemporaryState {
            selected: Some(MarkerRef::new(MarkerKind::Alpha, 0)),
            dragging: Some(MarkerRef::new(MarkerKind::Color, 2)),
        };
        if let Some(m) = state.color_marker_mut(2) {
            m.position = 0.1;
        }
        temp.resort(state.color_list_mut());

        assert_eq!(temp.selected, Some(MarkerRef::new(MarkerKind::Alpha, 0)));
        assert_eq!(temp.dragging, Some(MarkerRef::new(MarkerKind::Color, 1)));
    }

    #[test]
    fn insertion_shifts_later_refs() {
        let mut temp = TemporaryState {
            selected: Some(MarkerRef::new(MarkerKind::Color, 1)),
            dragging: Some(MarkerRef::new(MarkerKind::Alpha, 1)),
        };
        temp.note_inserted(MarkerKind::Color, 1);
        assert_eq!(temp.selected, Some(MarkerRef::new(MarkerKind::Color, 2)));
        assert_eq!(temp.dragging, Some(MarkerRef::new(MarkerKind::Alpha, 1)));

        temp.note_inserted(MarkerKind::Color, 3);
        assert_eq!(temp.selected, Some(MarkerRef::new(MarkerKind::Color, 2)));
    }
}
