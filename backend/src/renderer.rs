use crate::compositor::{Blit, Drawable, RenderTarget};
use crate::error::{Error, Result};
use crate::math::{DrawRect, Size};
use log::info;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::{Window, WindowContext};

/// Accelerated, vsynced renderer bound to one window. Owns the window, so
/// the window is released when the renderer is.
pub struct Renderer {
    canvas: WindowCanvas,
}

impl Renderer {
    /// Takes the first driver that supports the requested flags. If that
    /// fails the window is dropped along with the builder.
    pub fn new(window: Window) -> Result<Renderer> {
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(Error::renderer_create)?;
        let driver = canvas.info().name;
        info!("renderer created ({driver}, accelerated, vsync)");
        Ok(Renderer { canvas })
    }

    /// Textures made by the returned creator borrow it, and must be dropped
    /// before it.
    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    pub fn window_size(&self) -> Size {
        let (w, h) = self.canvas.window().size();
        Size::new(w, h)
    }
}

impl RenderTarget for Renderer {
    fn clear(&mut self) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

impl<'t> Blit<Texture<'t>> for Renderer {
    fn copy(&mut self, texture: &Texture<'t>, dst: DrawRect) -> std::result::Result<(), String> {
        self.canvas.copy(texture, None, Some(Rect::from(dst)))
    }
}

impl Drawable for Texture<'_> {
    fn size(&self) -> Size {
        let query = self.query();
        Size::new(query.width, query.height)
    }
}

impl From<DrawRect> for Rect {
    fn from(r: DrawRect) -> Self {
        Rect::new(r.x, r.y, r.w, r.h)
    }
}
