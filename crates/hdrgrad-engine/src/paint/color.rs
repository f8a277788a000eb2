use crate::coords::ColorRgba;

/// 32-bit packed display color.
///
/// Layout is `A << 24 | B << 16 | G << 8 | R`, i.e. RGBA bytes in memory on
/// little-endian targets. Channels are straight alpha, already saturated to
/// the displayable range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const TRANSPARENT: PackedColor = PackedColor(0);

    /// Packs straight sRGB bytes.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    /// Packs a float color, saturating every channel to [0, 1] first.
    ///
    /// HDR values above 1 clip to full brightness; NaN packs as 0.
    #[inline]
    pub fn from_rgba(c: ColorRgba) -> Self {
        Self::from_rgba8(unit_to_u8(c.r), unit_to_u8(c.g), unit_to_u8(c.b), unit_to_u8(c.a))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl From<ColorRgba> for PackedColor {
    #[inline]
    fn from(c: ColorRgba) -> Self {
        Self::from_rgba(c)
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0, the clamp keeps the rounding exact.
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_layout_is_abgr() {
        let c = PackedColor::from_rgba8(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.0, 0x4433_2211);
        assert_eq!(c.to_rgba8(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn float_channels_round_to_nearest() {
        let c = PackedColor::from_rgba(ColorRgba::new(0.0, 0.5, 1.0, 1.0));
        assert_eq!(c.to_rgba8(), [0, 128, 255, 255]);
    }

    #[test]
    fn hdr_values_saturate() {
        let c = PackedColor::from_rgba(ColorRgba::new(4.0, -2.0, 1.5, 3.0));
        assert_eq!(c.to_rgba8(), [255, 0, 255, 255]);
    }

    #[test]
    fn nan_packs_as_zero() {
        let c = PackedColor::from_rgba(ColorRgba::new(f32::NAN, 1.0, 1.0, 1.0));
        assert_eq!(c.r(), 0);
    }
}
