use crate::compositor::{tile_then_center, Blit, ComposeReport, Drawable};
use crate::error::Result;
use crate::math::Size;
use crate::texture::TextureLoader;
use log::info;
use std::path::Path;

/// The two textures of the frame: a background tiled from the origin and a
/// foreground centred on top.
///
/// Fields drop in declaration order, so the foreground goes first when the
/// scene is released. Either way both are gone before the loader they were
/// borrowed from.
pub struct Scene<T> {
    pub foreground: T,
    pub background: T,
}

impl<T: Drawable> Scene<T> {
    /// Loads the background, then the foreground. A background failure
    /// returns immediately without touching the foreground file; a
    /// foreground failure releases the already loaded background.
    pub fn load<'l, L>(loader: &'l L, background: &Path, foreground: &Path) -> Result<Self>
    where
        L: TextureLoader<'l, Texture = T>,
    {
        let background = loader.load_texture(background)?;
        let foreground = loader.load_texture(foreground)?;
        info!("scene ready");
        Ok(Scene {
            foreground,
            background,
        })
    }

    pub fn compose<R: Blit<T> + ?Sized>(&self, target: &mut R, window: Size) -> ComposeReport {
        tile_then_center(target, &self.background, &self.foreground, window)
    }
}
