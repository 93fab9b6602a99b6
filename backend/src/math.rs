#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    #[inline(always)]
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    #[inline(always)]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

/// Destination rectangle in back-buffer pixels. The origin may be negative
/// when the drawn item is larger than its container.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DrawRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl DrawRect {
    #[inline(always)]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    #[inline(always)]
    pub const fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.w, size.h)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    pub fn intersects(&self, other: &DrawRect) -> bool {
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }
}

/// Anchors of a 2x2 tiling starting at the origin: (0,0), (w,0), (0,h), (w,h).
///
/// This is not a fill. A tile smaller than half the window leaves the right
/// and bottom edges uncovered.
pub fn tile_origins(tile: Size) -> [Point; 4] {
    let (w, h) = (tile.w as i32, tile.h as i32);
    [
        Point::new(0, 0),
        Point::new(w, 0),
        Point::new(0, h),
        Point::new(w, h),
    ]
}

/// Top-left corner that centres `item` inside `container`, halving each
/// dimension separately with truncating integer division.
pub fn centered(container: Size, item: Size) -> Point {
    Point::new(
        container.w as i32 / 2 - item.w as i32 / 2,
        container.h as i32 / 2 - item.h as i32 / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_origins_are_the_four_quadrant_anchors() {
        let origins = tile_origins(Size::new(37, 11));
        assert_eq!(
            origins,
            [
                Point::new(0, 0),
                Point::new(37, 0),
                Point::new(0, 11),
                Point::new(37, 11),
            ]
        );
    }

    #[test]
    fn centred_100px_square_in_640x480() {
        assert_eq!(
            centered(Size::new(640, 480), Size::new(100, 100)),
            Point::new(270, 190)
        );
    }

    #[test]
    fn centering_truncates_each_half_separately() {
        // 641/2 - 101/2 = 320 - 50
        assert_eq!(
            centered(Size::new(641, 481), Size::new(101, 3)),
            Point::new(270, 239)
        );
    }

    #[test]
    fn oversized_item_gets_negative_origin() {
        assert_eq!(
            centered(Size::new(640, 480), Size::new(1000, 600)),
            Point::new(-180, -60)
        );
    }

    #[test]
    fn centering_holds_across_sizes() {
        for (cw, ch) in [(640, 480), (800, 600), (1, 1), (333, 777)] {
            for (iw, ih) in [(0, 0), (1, 1), (99, 100), (640, 480), (2000, 3)] {
                let p = centered(Size::new(cw, ch), Size::new(iw, ih));
                assert_eq!(p.x, cw as i32 / 2 - iw as i32 / 2);
                assert_eq!(p.y, ch as i32 / 2 - ih as i32 / 2);
            }
        }
    }

    #[test]
    fn rect_edges_and_overlap() {
        let a = DrawRect::new(0, 0, 320, 240);
        let b = DrawRect::new(320, 0, 320, 240);
        let c = DrawRect::new(300, 200, 50, 50);
        assert_eq!(a.right(), 320);
        assert_eq!(a.bottom(), 240);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
        assert_eq!(DrawRect::at(c.origin(), c.size()), c);
    }

    #[test]
    fn area_does_not_overflow_u32() {
        assert_eq!(Size::new(u32::MAX, 2).area(), u32::MAX as u64 * 2);
    }
}
