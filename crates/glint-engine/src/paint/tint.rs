use super::Color;

/// Packed `0xAARRGGBB` multiplier applied to sampled texels (straight alpha).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tint(pub u32);

impl Tint {
    /// Opaque white: texels are drawn unchanged.
    pub const NONE: Tint = Tint(0xFFFF_FFFF);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// The tint as a premultiplied shader color.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_straight_u8(self.red(), self.green(), self.blue(), self.alpha())
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::NONE
    }
}
