use hdrgrad_engine::coords::ColorRgba;

use super::list::MarkerList;
use super::marker::{AlphaMarker, ColorMarker, HdrColor};
use super::sample::sample;

/// Persistent gradient: independent color and alpha stop lists.
///
/// Owned by the host and passed by `&mut` to the editor each frame. Both
/// lists stay sorted by position; positions stay in [0, 1].
///
/// # Example
/// ```rust,ignore
/// let mut g = GradientState::new();
/// g.add_color_marker(0.0, [1.0, 0.2, 0.0], 1.0);
/// g.add_color_marker(1.0, [1.0, 0.9, 0.4], 4.0);
/// g.add_alpha_marker(0.0, 1.0);
/// g.add_alpha_marker(1.0, 0.0);
/// let mid = g.combined_color(0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientState {
    pub(crate) colors: MarkerList<ColorMarker>,
    pub(crate) alphas: MarkerList<AlphaMarker>,
}

impl GradientState {
    /// Gradient with no stops (evaluates to opaque white).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gradient from stops in any order. Stops beyond capacity are dropped.
    pub fn from_markers(
        colors: impl IntoIterator<Item = ColorMarker>,
        alphas: impl IntoIterator<Item = AlphaMarker>,
    ) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            alphas: alphas.into_iter().collect(),
        }
    }

    // ── stop access ───────────────────────────────────────────────────────

    #[inline]
    pub fn colors(&self) -> &[ColorMarker] {
        self.colors.as_slice()
    }

    #[inline]
    pub fn alphas(&self) -> &[AlphaMarker] {
        self.alphas.as_slice()
    }

    #[inline]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn alpha_count(&self) -> usize {
        self.alphas.len()
    }

    #[inline]
    pub fn color_marker(&self, index: usize) -> Option<&ColorMarker> {
        self.colors.get(index)
    }

    #[inline]
    pub fn alpha_marker(&self, index: usize) -> Option<&AlphaMarker> {
        self.alphas.get(index)
    }

    /// Mutable access to a color stop. Changing its position may require a
    /// re-sort, see [`MarkerList::sort_and_remap`].
    #[inline]
    pub fn color_marker_mut(&mut self, index: usize) -> Option<&mut ColorMarker> {
        self.colors.get_mut(index)
    }

    /// Mutable access to an alpha stop.
    #[inline]
    pub fn alpha_marker_mut(&mut self, index: usize) -> Option<&mut AlphaMarker> {
        self.alphas.get_mut(index)
    }

    #[inline]
    pub fn color_list_mut(&mut self) -> &mut MarkerList<ColorMarker> {
        &mut self.colors
    }

    #[inline]
    pub fn alpha_list_mut(&mut self) -> &mut MarkerList<AlphaMarker> {
        &mut self.alphas
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Inserts a color stop. Returns `false` when the color list is full.
    pub fn add_color_marker(&mut self, position: f32, color: [f32; 3], intensity: f32) -> bool {
        self.colors.insert(ColorMarker::new(position, color, intensity)).is_some()
    }

    /// Inserts an alpha stop. Returns `false` when the alpha list is full.
    pub fn add_alpha_marker(&mut self, position: f32, alpha: f32) -> bool {
        self.alphas.insert(AlphaMarker::new(position, alpha)).is_some()
    }

    /// Removes the color stop at `index`. Returns `false` when out of range.
    ///
    /// Interaction state is not adjusted; see
    /// [`TemporaryState::remove_selected`](crate::editor::TemporaryState::remove_selected).
    pub fn remove_color_marker(&mut self, index: usize) -> bool {
        self.colors.remove(index).is_some()
    }

    /// Removes the alpha stop at `index`. Returns `false` when out of range.
    pub fn remove_alpha_marker(&mut self, index: usize) -> bool {
        self.alphas.remove(index).is_some()
    }

    // ── evaluation ────────────────────────────────────────────────────────

    /// Interpolated base color and intensity at `x`.
    ///
    /// White at intensity 1 without color stops; the end stops hold outside their range.
    pub fn color_and_intensity(&self, x: f32) -> HdrColor {
        sample(self.colors.as_slice(), x)
    }

    /// Interpolated opacity at `x`; 1 without alpha stops.
    pub fn alpha(&self, x: f32) -> f32 {
        sample(self.alphas.as_slice(), x)
    }

    /// Final rendered value at `x`: RGB scaled by intensity, alpha from the alpha channel.
    pub fn combined_color(&self, x: f32) -> ColorRgba {
        let [r, g, b] = self.color_and_intensity(x).scaled();
        ColorRgba::new(r, g, b, self.alpha(x))
    }

    /// Samples [`combined_color`](Self::combined_color) at `samples` evenly
    /// spaced positions from 0 to 1 inclusive, e.g. to fill a lookup texture.
    pub fn bake(&self, samples: usize) -> Vec<ColorRgba> {
        match samples {
            0 => Vec::new(),
            1 => vec![self.combined_color(0.0)],
            n => {
                let last = (n - 1) as f32;
                (0..n).map(|i| self.combined_color(i as f32 / last)).collect()
            }
        }
    }
}
