use crate::compositor::Drawable;
use crate::error::{Error, Result};
use log::{debug, info};
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use std::path::Path;

/// Turns an image file into a drawable handle owned by a renderer.
pub trait TextureLoader<'l> {
    type Texture: Drawable;

    fn load_texture(&'l self, path: &Path) -> Result<Self::Texture>;
}

/// Decodes a BMP file into a CPU-side surface.
pub fn decode_bmp(path: &Path) -> Result<Surface<'static>> {
    let surface = Surface::load_bmp(path).map_err(|message| Error::ImageDecode {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(
        "decoded {path:?}: {} x {}, {:?}",
        surface.width(),
        surface.height(),
        surface.pixel_format_enum()
    );
    Ok(surface)
}

impl<'l> TextureLoader<'l> for TextureCreator<WindowContext> {
    type Texture = Texture<'l>;

    fn load_texture(&'l self, path: &Path) -> Result<Texture<'l>> {
        let surface = decode_bmp(path)?;
        // the surface is freed when it leaves scope, whether or not the upload worked
        let texture = self
            .create_texture_from_surface(&surface)
            .map_err(|e| Error::image_upload(path, e))?;
        let size = texture.size();
        info!("loaded {path:?} as {} x {} texture", size.w, size.h);
        Ok(texture)
    }
}
