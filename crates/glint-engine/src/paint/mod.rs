//! Paint model.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - tints applied to textured quads
//! - paint sources (solid, image pattern)

pub mod color;
pub mod pattern;
pub mod tint;

pub use color::Color;
pub use pattern::Pattern;
pub use tint::Tint;

/// Paint source for filling geometry.
#[derive(Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Pattern(Pattern),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            // Texel alpha is unknown on the CPU side.
            Paint::Pattern(_) => false,
        }
    }
}

impl From<Pattern> for Paint {
    fn from(pattern: Pattern) -> Self {
        Paint::Pattern(pattern)
    }
}
