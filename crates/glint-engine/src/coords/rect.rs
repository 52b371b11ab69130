use super::Vec2;

/// Axis-aligned rectangle (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle anchored at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self { origin: Vec2::ZERO, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner (`origin + size`).
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Returns this rectangle moved by `delta`.
    #[inline]
    pub fn translated(self, delta: Vec2) -> Self {
        Self::from_origin_size(self.origin + delta, self.size)
    }

    /// True when `other` lies entirely inside `self` (edges inclusive).
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        self.origin.fits_within(other.origin) && other.max().fits_within(self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn max_is_origin_plus_size() {
        assert_eq!(r(4.0, 8.0, 10.0, 20.0).max(), Vec2::new(14.0, 28.0));
    }

    #[test]
    fn translated_keeps_size() {
        let moved = r(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(64.0, 0.0));
        assert_eq!(moved, r(65.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn contains_rect_edges_inclusive() {
        let outer = r(0.0, 0.0, 256.0, 256.0);
        assert!(outer.contains_rect(r(192.0, 192.0, 64.0, 64.0)));
        assert!(outer.contains_rect(outer));
    }

    #[test]
    fn contains_rect_rejects_overhang() {
        let outer = r(0.0, 0.0, 256.0, 256.0);
        assert!(!outer.contains_rect(r(200.0, 0.0, 64.0, 64.0)));
        assert!(!outer.contains_rect(r(-1.0, 0.0, 8.0, 8.0)));
    }

    #[test]
    fn is_empty_zero_or_negative_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, -1.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn is_finite_rejects_nan() {
        assert!(!r(f32::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(r(0.0, 0.0, 1.0, 1.0).is_finite());
    }
}
