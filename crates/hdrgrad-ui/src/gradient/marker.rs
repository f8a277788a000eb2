use hdrgrad_engine::coords::ColorRgba;

/// Maximum number of stops per channel.
pub const MARKER_MAX: usize = 8;

/// Which of the two independent stop channels a marker belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Color,
    Alpha,
}

/// A color + HDR intensity stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorMarker {
    /// Normalized position in [0, 1].
    pub position: f32,
    /// Linear RGB, not clamped.
    pub color: [f32; 3],
    /// Multiplier applied to `color` when the gradient is evaluated.
    pub intensity: f32,
}

impl ColorMarker {
    #[inline]
    pub const fn new(position: f32, color: [f32; 3], intensity: f32) -> Self {
        Self { position, color, intensity }
    }
}

/// An opacity stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AlphaMarker {
    /// Normalized position in [0, 1].
    pub position: f32,
    pub alpha: f32,
}

impl AlphaMarker {
    #[inline]
    pub const fn new(position: f32, alpha: f32) -> Self {
        Self { position, alpha }
    }
}

/// Interpolated value of the color channel: base color plus its intensity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HdrColor {
    pub rgb: [f32; 3],
    pub intensity: f32,
}

impl HdrColor {
    #[inline]
    pub const fn new(rgb: [f32; 3], intensity: f32) -> Self {
        Self { rgb, intensity }
    }

    /// RGB multiplied by intensity.
    #[inline]
    pub fn scaled(self) -> [f32; 3] {
        self.rgb.map(|c| c * self.intensity)
    }
}

impl Default for HdrColor {
    /// White at intensity 1, the value of a gradient without color stops.
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0], 1.0)
    }
}

/// Common surface of the two stop types.
///
/// Lets the store, the interpolation and the editor loop be written once for
/// both channels.
pub trait Marker: Copy + std::fmt::Debug {
    /// Value carried by the stop and produced by interpolation.
    type Value: Copy;

    const KIND: MarkerKind;

    /// Value of a channel without any stops.
    fn empty_value() -> Self::Value;

    fn position(&self) -> f32;

    fn set_position(&mut self, position: f32);

    fn value(&self) -> Self::Value;

    /// Builds a stop from a position and a value (used when inserting a stop
    /// sampled from the gradient).
    fn from_value(position: f32, value: Self::Value) -> Self;

    /// `hi * t + lo * (1 - t)` on every component.
    fn lerp(lo: Self::Value, hi: Self::Value, t: f32) -> Self::Value;

    /// Color used to draw a value in the editor, before alpha is applied.
    fn swatch(value: Self::Value) -> ColorRgba;
}

#[inline]
fn mix(lo: f32, hi: f32, t: f32) -> f32 {
    hi * t + lo * (1.0 - t)
}

impl Marker for ColorMarker {
    type Value = HdrColor;
    const KIND: MarkerKind = MarkerKind::Color;

    #[inline]
    fn empty_value() -> HdrColor {
        HdrColor::default()
    }

    #[inline]
    fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: f32) {
        self.position = position;
    }

    #[inline]
    fn value(&self) -> HdrColor {
        HdrColor::new(self.color, self.intensity)
    }

    #[inline]
    fn from_value(position: f32, value: HdrColor) -> Self {
        Self::new(position, value.rgb, value.intensity)
    }

    #[inline]
    fn lerp(lo: HdrColor, hi: HdrColor, t: f32) -> HdrColor {
        HdrColor::new(
            [mix(lo.rgb[0], hi.rgb[0], t), mix(lo.rgb[1], hi.rgb[1], t), mix(lo.rgb[2], hi.rgb[2], t)],
            mix(lo.intensity, hi.intensity, t),
        )
    }

    /// Base color without intensity; the glyph shows hue, the bar shows brightness.
    #[inline]
    fn swatch(value: HdrColor) -> ColorRgba {
        ColorRgba::new(value.rgb[0], value.rgb[1], value.rgb[2], 1.0)
    }
}

impl Marker for AlphaMarker {
    type Value = f32;
    const KIND: MarkerKind = MarkerKind::Alpha;

    #[inline]
    fn empty_value() -> f32 {
        1.0
    }

    #[inline]
    fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: f32) {
        self.position = position;
    }

    #[inline]
    fn value(&self) -> f32 {
        self.alpha
    }

    #[inline]
    fn from_value(position: f32, value: f32) -> Self {
        Self::new(position, value)
    }

    #[inline]
    fn lerp(lo: f32, hi: f32, t: f32) -> f32 {
        mix(lo, hi, t)
    }

    #[inline]
    fn swatch(value: f32) -> ColorRgba {
        ColorRgba::gray(value, 1.0)
    }
}

/// Clamps a position into [0, 1]. NaN maps to 0 so it can never poison ordering.
#[inline]
pub(crate) fn clamp_unit(x: f32) -> f32 {
    // `+ 0.0` turns -0.0 into 0.0.
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) + 0.0 }
}
