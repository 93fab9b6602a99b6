use crate::math::{centered, tile_origins, DrawRect, Point, Size};
use log::{debug, warn};

/// Anything with a natural pixel size that can be copied unscaled.
pub trait Drawable {
    fn size(&self) -> Size;
}

/// A back buffer that can be cleared and flipped to the screen.
pub trait RenderTarget {
    fn clear(&mut self);
    fn present(&mut self);
}

/// Copies whole textures of type `T` into the back buffer.
pub trait Blit<T: ?Sized>: RenderTarget {
    fn copy(&mut self, texture: &T, dst: DrawRect) -> Result<(), String>;
}

/// A texture placed at its natural size. Built and consumed in one draw.
pub struct DrawRequest<'t, T: ?Sized> {
    pub texture: &'t T,
    pub dst: DrawRect,
}

impl<'t, T: Drawable + ?Sized> DrawRequest<'t, T> {
    pub fn natural(texture: &'t T, at: Point) -> Self {
        Self {
            texture,
            dst: DrawRect::at(at, texture.size()),
        }
    }
}

/// Outcome of composing one frame. Copy failures are counted, never fatal.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ComposeReport {
    pub draws: usize,
    pub failed: usize,
    pub tiles: [DrawRect; 4],
    pub foreground: DrawRect,
}

/// Draws `texture` unscaled with its top-left corner at (x, y).
///
/// Returns the destination rectangle and whether the copy succeeded. A
/// failed copy is logged and otherwise ignored.
pub fn render_texture<T, R>(target: &mut R, texture: &T, x: i32, y: i32) -> (DrawRect, bool)
where
    T: Drawable + ?Sized,
    R: Blit<T> + ?Sized,
{
    let request = DrawRequest::natural(texture, Point::new(x, y));
    match target.copy(request.texture, request.dst) {
        Ok(()) => (request.dst, true),
        Err(e) => {
            warn!("RenderCopy to {:?} failed: {e}", request.dst);
            (request.dst, false)
        }
    }
}

/// Clears the back buffer, tiles `background` 2x2 from the origin and draws
/// `foreground` centred in `window` on top.
pub fn tile_then_center<T, R>(
    target: &mut R,
    background: &T,
    foreground: &T,
    window: Size,
) -> ComposeReport
where
    T: Drawable + ?Sized,
    R: Blit<T> + ?Sized,
{
    let mut report = ComposeReport::default();
    target.clear();

    let tile = background.size();
    debug!("background {} x {}, tiling 2x2", tile.w, tile.h);
    for (slot, origin) in tile_origins(tile).into_iter().enumerate() {
        let (dst, ok) = render_texture(target, background, origin.x, origin.y);
        report.tiles[slot] = dst;
        report.draws += 1;
        report.failed += usize::from(!ok);
    }

    let item = foreground.size();
    let at = centered(window, item);
    debug!(
        "foreground {} x {} centred at ({}, {}) in {} x {}",
        item.w, item.h, at.x, at.y, window.w, window.h
    );
    let (dst, ok) = render_texture(target, foreground, at.x, at.y);
    report.foreground = dst;
    report.draws += 1;
    report.failed += usize::from(!ok);

    report
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Clear,
        Copy(&'static str, DrawRect),
        Present,
    }

    /// Records every call. Drops count into a shared ledger.
    #[derive(Debug)]
    pub struct FakeTexture {
        pub name: &'static str,
        pub size: Size,
        pub released: Rc<RefCell<Vec<&'static str>>>,
    }

    impl FakeTexture {
        pub fn new(name: &'static str, w: u32, h: u32) -> Self {
            Self {
                name,
                size: Size::new(w, h),
                released: Rc::default(),
            }
        }
    }

    impl Drop for FakeTexture {
        fn drop(&mut self) {
            self.released.borrow_mut().push(self.name);
        }
    }

    impl Drawable for FakeTexture {
        fn size(&self) -> Size {
            self.size
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingTarget {
        pub calls: Vec<Call>,
        /// Copies to these destinations fail.
        pub reject: Vec<DrawRect>,
    }

    impl RecordingTarget {
        pub fn copies(&self) -> Vec<(&'static str, DrawRect)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Copy(name, dst) => Some((*name, *dst)),
                    _ => None,
                })
                .collect()
        }

        pub fn presents(&self) -> usize {
            self.calls.iter().filter(|c| **c == Call::Present).count()
        }
    }

    impl RenderTarget for RecordingTarget {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    impl Blit<FakeTexture> for RecordingTarget {
        fn copy(&mut self, texture: &FakeTexture, dst: DrawRect) -> Result<(), String> {
            self.calls.push(Call::Copy(texture.name, dst));
            if self.reject.contains(&dst) {
                return Err("Invalid texture".to_string());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    const WINDOW: Size = Size::new(640, 480);

    #[test]
    fn render_texture_copies_at_natural_size() {
        let mut target = RecordingTarget::default();
        let tex = FakeTexture::new("img", 33, 17);
        let (dst, ok) = render_texture(&mut target, &tex, -4, 9);
        assert!(ok);
        assert_eq!(dst, DrawRect::new(-4, 9, 33, 17));
        assert_eq!(target.calls, vec![Call::Copy("img", dst)]);
    }

    #[test]
    fn frame_is_clear_then_four_tiles_then_foreground() {
        let mut target = RecordingTarget::default();
        let bg = FakeTexture::new("bg", 200, 150);
        let fg = FakeTexture::new("fg", 64, 32);
        let report = tile_then_center(&mut target, &bg, &fg, WINDOW);

        assert_eq!(target.calls[0], Call::Clear);
        assert_eq!(
            target.copies(),
            vec![
                ("bg", DrawRect::new(0, 0, 200, 150)),
                ("bg", DrawRect::new(200, 0, 200, 150)),
                ("bg", DrawRect::new(0, 150, 200, 150)),
                ("bg", DrawRect::new(200, 150, 200, 150)),
                ("fg", DrawRect::new(288, 224, 64, 32)),
            ]
        );
        assert_eq!(report.draws, 5);
        assert_eq!(report.failed, 0);
        assert_eq!(target.presents(), 0);
    }

    #[test]
    fn half_window_background_covers_exactly() {
        let mut target = RecordingTarget::default();
        let bg = FakeTexture::new("bg", 320, 240);
        let fg = FakeTexture::new("fg", 1, 1);
        let report = tile_then_center(&mut target, &bg, &fg, WINDOW);

        let covered: u64 = report.tiles.iter().map(|t| t.size().area()).sum();
        assert_eq!(covered, WINDOW.area());
        for (i, a) in report.tiles.iter().enumerate() {
            assert!(a.x >= 0 && a.y >= 0);
            assert!(a.right() <= WINDOW.w as i64 && a.bottom() <= WINDOW.h as i64);
            for b in &report.tiles[i + 1..] {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn small_background_leaves_gaps() {
        let mut target = RecordingTarget::default();
        let bg = FakeTexture::new("bg", 100, 100);
        let fg = FakeTexture::new("fg", 10, 10);
        let report = tile_then_center(&mut target, &bg, &fg, WINDOW);
        let furthest = report.tiles.iter().map(|t| t.right()).max().unwrap();
        assert_eq!(furthest, 200);
        assert_eq!(target.copies().len(), 5);
    }

    #[test]
    fn foreground_100x100_lands_at_270_190() {
        let mut target = RecordingTarget::default();
        let bg = FakeTexture::new("bg", 320, 240);
        let fg = FakeTexture::new("fg", 100, 100);
        let report = tile_then_center(&mut target, &bg, &fg, WINDOW);
        assert_eq!(report.foreground, DrawRect::new(270, 190, 100, 100));
        assert_eq!(target.copies().last(), Some(&("fg", report.foreground)));
    }

    #[test]
    fn failed_copy_is_counted_and_drawing_continues() {
        let mut target = RecordingTarget {
            reject: vec![DrawRect::new(50, 0, 50, 40)],
            ..Default::default()
        };
        let bg = FakeTexture::new("bg", 50, 40);
        let fg = FakeTexture::new("fg", 10, 10);
        let report = tile_then_center(&mut target, &bg, &fg, WINDOW);
        assert_eq!(report.draws, 5);
        assert_eq!(report.failed, 1);
        assert_eq!(target.copies().len(), 5);
    }
}
