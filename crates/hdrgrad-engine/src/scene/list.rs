use crate::coords::Vec2;

use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are painted back-to-front in the order they were pushed, the way
/// immediate-mode hosts batch them.
///
/// Polygons are built through a path: call [`path_line_to`](Self::path_line_to)
/// for each vertex, then [`path_fill_convex`](Self::path_fill_convex) to record
/// the fill and reset the path.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
    path: Vec<Vec2>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands and any pending path. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.path.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Appends a vertex to the pending path.
    #[inline]
    pub fn path_line_to(&mut self, p: Vec2) {
        self.path.push(p);
    }

    /// Vertices of the pending path.
    #[inline]
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    pub(crate) fn take_path(&mut self) -> Vec<Vec2> {
        std::mem::take(&mut self.path)
    }
}
