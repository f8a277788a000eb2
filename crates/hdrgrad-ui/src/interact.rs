//! Interactive regions and pointer ownership.
//!
//! [`ActiveItem`] lives on [`crate::scene::UiScene`] and is threaded into
//! [`crate::painter::Painter`] each frame.
//!
//! # How pointer ownership works
//!
//! 1. Widgets call `painter.interact_at(part, rect)` for every hit region,
//!    in paint order. The region's [`WidgetId`] is derived from the painter's
//!    id stack and `part`.
//! 2. A region is hovered when the pointer is inside it and no *other*
//!    region owns the pointer.
//! 3. A hovered region becomes active (owns the pointer) when the primary
//!    button is pressed over it; the first region to claim a press wins.
//! 4. At **end of frame**, [`ActiveItem::end_frame`] releases ownership once
//!    the button is no longer held.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use hdrgrad_engine::coords::Rect;

// ── WidgetId ──────────────────────────────────────────────────────────────

/// Identifier of an interactive region.
///
/// Derived by hashing a parent id with a part key, so the same call sequence
/// produces the same ids every frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    pub const ROOT: WidgetId = WidgetId(0);

    /// Child id scoped under `self`.
    pub fn with(self, part: impl Hash) -> WidgetId {
        let mut h = DefaultHasher::new();
        self.0.hash(&mut h);
        part.hash(&mut h);
        WidgetId(h.finish())
    }
}

// ── ActiveItem ────────────────────────────────────────────────────────────

/// Tracks which region currently owns the pointer.
#[derive(Debug, Default)]
pub struct ActiveItem {
    active: Option<WidgetId>,
}

impl ActiveItem {
    #[inline]
    pub fn get(&self) -> Option<WidgetId> {
        self.active
    }

    #[inline]
    pub fn is_active(&self, id: WidgetId) -> bool {
        self.active == Some(id)
    }

    /// `true` when no region, or `id` itself, owns the pointer.
    #[inline]
    pub fn is_available_to(&self, id: WidgetId) -> bool {
        self.active.is_none_or(|a| a == id)
    }

    #[inline]
    pub(crate) fn activate(&mut self, id: WidgetId) {
        self.active = Some(id);
    }

    /// Releases ownership once the primary button is up.
    ///
    /// Called at the end of each frame by `UiScene::frame`.
    pub fn end_frame(&mut self, mouse_down: bool) {
        if !mouse_down {
            self.active = None;
        }
    }
}

// ── Response ──────────────────────────────────────────────────────────────

/// Result of hit-testing one region for the current frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Response {
    pub id: WidgetId,
    pub rect: Rect,
    /// Pointer is over the region and nothing else owns it.
    pub hovered: bool,
    /// The primary button went down over the region this frame.
    pub pressed: bool,
    /// The region owns the pointer.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_deterministic_and_scoped() {
        let a = WidgetId::ROOT.with(7).with(("c", 1usize));
        let b = WidgetId::ROOT.with(7).with(("c", 1usize));
        let other_scope = WidgetId::ROOT.with(8).with(("c", 1usize));
        assert_eq!(a, b);
        assert_ne!(a, other_scope);
        assert_ne!(a, WidgetId::ROOT.with(7).with(("a", 1usize)));
    }

    #[test]
    fn ownership_blocks_others_until_release() {
        let mut active = ActiveItem::default();
        let a = WidgetId::ROOT.with(1);
        let b = WidgetId::ROOT.with(2);
        assert!(active.is_available_to(a) && active.is_available_to(b));

        active.activate(a);
        assert!(active.is_available_to(a));
        assert!(!active.is_available_to(b));

        active.end_frame(true);
        assert!(active.is_active(a));

        active.end_frame(false);
        assert_eq!(active.get(), None);
    }
}
