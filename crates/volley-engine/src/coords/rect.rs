use super::Vec2;

/// Axis-aligned rectangle in logical pixels.
///
/// Stored as top-left origin + size; game entities usually build it from a
/// center point with [`Rect::from_center`].
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
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.origin.x < b_max.x
            && other.origin.x < a_max.x
            && self.origin.y < b_max.y
            && other.origin.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(cx: f32, cy: f32, w: f32, h: f32) -> Rect {
        Rect::from_center(Vec2::new(cx, cy), Vec2::new(w, h))
    }

    #[test]
    fn from_center_round_trips_center() {
        let r = at(200.0, 380.0, 40.0, 40.0);
        assert_eq!(r.origin, Vec2::new(180.0, 360.0));
        assert_eq!(r.center(), Vec2::new(200.0, 380.0));
    }

    #[test]
    fn overlapping_rects() {
        assert!(at(0.0, 0.0, 10.0, 10.0).overlaps(at(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn contained_rect_overlaps() {
        assert!(at(0.0, 0.0, 100.0, 100.0).overlaps(at(0.0, 0.0, 4.0, 12.0)));
    }

    #[test]
    fn shared_edge_is_not_overlap() {
        assert!(!at(0.0, 0.0, 10.0, 10.0).overlaps(at(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn disjoint_on_one_axis_is_not_overlap() {
        assert!(!at(0.0, 0.0, 10.0, 10.0).overlaps(at(5.0, 30.0, 10.0, 10.0)));
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
