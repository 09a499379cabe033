use crate::coords::Rect;
use crate::paint::Color;

/// Solid rectangle, painted in recording order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Draw commands for one frame.
///
/// `clear` keeps the allocation, so a list reused across frames stops
/// allocating once warm.
#[derive(Debug, Default)]
pub struct DrawList {
    rects: Vec<RectCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a filled rectangle. Empty rectangles are dropped.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.rects.push(RectCmd { rect, color });
    }

    pub fn rects(&self) -> &[RectCmd] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }
}
