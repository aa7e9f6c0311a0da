// Core types shared by the game logic and the renderer.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of `width * height` pixels, all set to `color`.
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }
}

/// Axis-aligned rectangle in window pixels. `x`,`y` is the top-left corner.
/// Visual: never drawn; it is the hit box used for razor vs hair tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the two rectangles share at least one pixel.
    /// Touching edges don't count, and an empty rectangle never overlaps.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Pack an RGB triple as 0x00RRGGBB.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_single_pixel() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 9, 5, 5);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a), "overlap must be symmetric");
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 5, 5);
        let below = Rect::new(0, 10, 5, 5);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!right.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 2, 2);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(5, 5, 0, 4)));
        assert!(!Rect::new(5, 5, 3, 0).overlaps(&a));
    }

    #[test]
    fn test_rgb_packing() {
        assert_eq!(rgb(255, 229, 204), 0x00_FF_E5_CC);
        assert_eq!(rgb(0, 0, 0), 0);
    }
}
