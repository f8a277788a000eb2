use super::marker::{clamp_unit, Marker, MARKER_MAX};

/// Bounded sequence of stops kept sorted ascending by position.
///
/// Holds at most [`MARKER_MAX`] entries. Sortedness is maintained by
/// [`insert`](Self::insert) and restored by [`sort_and_remap`](Self::sort_and_remap)
/// after positions are edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerList<T> {
    items: Vec<T>,
}

impl<T: Marker> MarkerList<T> {
    pub fn new() -> Self {
        Self { items: Vec::with_capacity(MARKER_MAX) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MARKER_MAX
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable access to a stop.
    ///
    /// Moving a stop through this reference can break ordering; call
    /// [`sort_and_remap`](Self::sort_and_remap) afterwards.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// First index whose position is not less than `position`.
    #[inline]
    pub fn insertion_point(&self, position: f32) -> usize {
        self.items.partition_point(|m| m.position() < position)
    }

    /// Inserts `marker` at its sorted place after clamping its position to [0, 1].
    ///
    /// Returns the index it landed at, or `None` (and leaves the list
    /// untouched) when the list is full. A stop sharing its position with
    /// existing ones lands before all of them.
    pub fn insert(&mut self, mut marker: T) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        marker.set_position(clamp_unit(marker.position()));
        let index = self.insertion_point(marker.position());
        self.items.insert(index, marker);
        Some(index)
    }

    /// Removes the stop at `index`, shifting later ones left.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_sorted(&self) -> bool {
        self.items.windows(2).all(|w| w[0].position() <= w[1].position())
    }

    /// Restores ascending order and follows the given indices to their stops' new slots.
    ///
    /// The sort is stable, so stops sharing a position keep their relative
    /// order. `selected` and `dragging` are pre-sort indices; each one that
    /// names a live stop is rewritten to where that stop ended up.
    pub fn sort_and_remap(&mut self, selected: &mut Option<usize>, dragging: &mut Option<usize>) {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        // `+ 0.0` folds -0.0 into 0.0 so ties compare like they do in `insert`.
        let key = |i: usize| self.items[i].position() + 0.0;
        order.sort_by(|&a, &b| key(a).total_cmp(&key(b)));

        if order.iter().enumerate().all(|(slot, &orig)| slot == orig) {
            return;
        }

        self.items = order.iter().map(|&orig| self.items[orig]).collect();

        let remap = |index: &mut Option<usize>| {
            if let Some(orig) = *index {
                if let Some(slot) = order.iter().position(|&o| o == orig) {
                    *index = Some(slot);
                }
            }
        };
        remap(selected);
        remap(dragging);
    }
}

impl<T: Marker> Default for MarkerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Marker> FromIterator<T> for MarkerList<T> {
    /// Collects stops through [`insert`](MarkerList::insert); stops beyond
    /// [`MARKER_MAX`] are dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for marker in iter {
            if list.insert(marker).is_none() {
                log::debug!("marker list full, dropping {marker:?}");
                break;
            }
        }
        list
    }
}

impl<'a, T: Marker> IntoIterator for &'a MarkerList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::AlphaMarker;

    fn list(positions: &[f32]) -> MarkerList<AlphaMarker> {
        positions.iter().enumerate().map(|(i, &p)| AlphaMarker::new(p, i as f32)).collect()
    }

    fn positions(l: &MarkerList<AlphaMarker>) -> Vec<f32> {
        l.iter().map(|m| m.position).collect()
    }

    // ── insert ────────────────────────────────────────────────────────────

    #[test]
    fn insert_keeps_ascending_order() {
        let l = list(&[0.7, 0.1, 0.4, 1.0, 0.0]);
        assert_eq!(positions(&l), vec![0.0, 0.1, 0.4, 0.7, 1.0]);
        assert!(l.is_sorted());
    }

    #[test]
    fn insert_clamps_position() {
        let mut l = MarkerList::new();
        assert_eq!(l.insert(AlphaMarker::new(-0.5, 1.0)), Some(0));
        assert_eq!(l.insert(AlphaMarker::new(3.0, 1.0)), Some(1));
        assert_eq!(positions(&l), vec![0.0, 1.0]);
    }

    #[test]
    fn insert_nan_position_lands_at_zero() {
        let mut l = list(&[0.5]);
        assert_eq!(l.insert(AlphaMarker::new(f32::NAN, 0.0)), Some(0));
        assert_eq!(positions(&l), vec![0.0, 0.5]);
    }

    #[test]
    fn equal_position_inserts_before_existing() {
        let mut l = list(&[0.2, 0.5, 0.8]);
        let index = l.insert(AlphaMarker::new(0.5, 42.0));
        assert_eq!(index, Some(1));
        assert_eq!(l.get(1).map(|m| m.alpha), Some(42.0));
        assert_eq!(l.get(2).map(|m| m.alpha), Some(1.0));
    }

    #[test]
    fn insert_fails_when_full() {
        let mut l = list(&[0.0; MARKER_MAX]);
        assert!(l.is_full());
        let before = l.clone();
        assert_eq!(l.insert(AlphaMarker::new(0.5, 1.0)), None);
        assert_eq!(l, before);
    }

    #[test]
    fn collect_drops_overflow() {
        let l = list(&[0.5; MARKER_MAX + 3]);
        assert_eq!(l.len(), MARKER_MAX);
    }

    // ── remove ────────────────────────────────────────────────────────────

    #[test]
    fn remove_shifts_left() {
        let mut l = list(&[0.1, 0.2, 0.3]);
        let removed = l.remove(1);
        assert_eq!(removed.map(|m| m.position), Some(0.2));
        assert_eq!(positions(&l), vec![0.1, 0.3]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut l = list(&[0.1, 0.2]);
        assert_eq!(l.remove(2), None);
        assert_eq!(l.len(), 2);
    }

    // ── sort_and_remap ────────────────────────────────────────────────────

    #[test]
    fn sort_follows_dragged_marker_past_neighbor() {
        let mut l = list(&[0.1, 0.3, 0.6]);
        // Drag the first stop past the second one.
        if let Some(m) = l.get_mut(0) {
            m.position = 0.45;
        }
        let mut selected = Some(0);
        let mut dragging = Some(0);
        l.sort_and_remap(&mut selected, &mut dragging);

        assert_eq!(positions(&l), vec![0.3, 0.45, 0.6]);
        assert_eq!(selected, Some(1));
        assert_eq!(dragging, Some(1));
        // Same logical stop, identified by its value.
        assert_eq!(l.get(1).map(|m| m.alpha), Some(0.0));
    }

    #[test]
    fn sort_remaps_unrelated_selection_too() {
        let mut l = list(&[0.1, 0.3, 0.6]);
        if let Some(m) = l.get_mut(2) {
            m.position = 0.0;
        }
        let mut selected = Some(1);
        let mut dragging = None;
        l.sort_and_remap(&mut selected, &mut dragging);

        assert_eq!(positions(&l), vec![0.0, 0.1, 0.3]);
        assert_eq!(selected, Some(2));
        assert_eq!(l.get(2).map(|m| m.alpha), Some(1.0));
        assert_eq!(dragging, None);
    }

    #[test]
    fn sort_is_stable_for_equal_positions() {
        let mut l = list(&[0.2, 0.4, 0.6]);
        if let Some(m) = l.get_mut(2) {
            m.position = 0.4;
        }
        let (mut s, mut d) = (None, None);
        l.sort_and_remap(&mut s, &mut d);
        let alphas: Vec<f32> = l.iter().map(|m| m.alpha).collect();
        assert_eq!(alphas, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn signed_zero_ties_keep_insertion_order() {
        let mut l = MarkerList::new();
        l.insert(AlphaMarker::new(-0.0, 1.0));
        l.insert(AlphaMarker::new(0.0, 2.0));
        l.insert(AlphaMarker::new(0.5, 3.0));
        let order = |l: &MarkerList<AlphaMarker>| l.iter().map(|m| m.alpha).collect::<Vec<_>>();
        assert_eq!(order(&l), vec![2.0, 1.0, 3.0]);
        assert!(l.iter().all(|m| m.position.is_sign_positive()));

        let (mut s, mut d) = (None, None);
        l.sort_and_remap(&mut s, &mut d);
        assert_eq!(order(&l), vec![2.0, 1.0, 3.0]);

        // A host writing -0.0 directly still ties with 0.0.
        if let Some(m) = l.get_mut(1) {
            m.position = -0.0;
        }
        let mut s = Some(1);
        l.sort_and_remap(&mut s, &mut d);
        assert_eq!(order(&l), vec![2.0, 1.0, 3.0]);
        assert_eq!(s, Some(1));
    }

    #[test]
    fn stale_index_is_left_alone() {
        let mut l = list(&[0.5, 0.1]);
        let mut selected = Some(7);
        let mut dragging = None;
        if let Some(m) = l.get_mut(0) {
            m.position = 0.9;
        }
        l.sort_and_remap(&mut selected, &mut dragging);
        assert_eq!(selected, Some(7));
    }
}
