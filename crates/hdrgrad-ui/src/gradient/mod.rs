//! Gradient model: marker store, interpolation and reordering.
//!
//! Everything here is independent of the editor widget and can be used to
//! evaluate or bake a gradient without a painter.

mod list;
mod marker;
mod sample;
mod state;

pub use list::MarkerList;
pub use marker::{AlphaMarker, ColorMarker, HdrColor, Marker, MarkerKind, MARKER_MAX};
pub use state::GradientState;

pub(crate) use marker::clamp_unit;
pub(crate) use sample::sample;
