use crate::error::{Error, Result};
use crate::math::Size;
use log::{debug, info};
use sdl2;
use sdl2::video::Window;

/// Fixed attributes of the single window the program opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowSpec {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            title: "Lesson 2".to_string(),
            x: 100,
            y: 100,
            width: 640,
            height: 480,
        }
    }
}

/// Owned handle to the initialised SDL library. SDL shuts down when the
/// last clone of the context inside it is dropped, which is after every
/// window and renderer created from it.
pub struct System {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub event_subsystem: sdl2::EventSubsystem,
}

impl System {
    /// Brings up the video and event subsystems together. Failure of either
    /// is fatal and leaves nothing initialised.
    pub fn init() -> Result<System> {
        let sdl_context = sdl2::init().map_err(Error::PlatformInit)?;
        let video_subsystem = sdl_context.video().map_err(Error::PlatformInit)?;
        let event_subsystem = sdl_context.event().map_err(Error::PlatformInit)?;
        info!(
            "SDL {} initialised, video driver {}",
            sdl2::version::version(),
            video_subsystem.current_video_driver()
        );
        Ok(System {
            sdl_context,
            video_subsystem,
            event_subsystem,
        })
    }

    pub fn create_window(&self, spec: &WindowSpec) -> Result<Window> {
        let window = self
            .video_subsystem
            .window(&spec.title, spec.width, spec.height)
            .position(spec.x, spec.y)
            .build()
            .map_err(Error::window_create)?;
        info!(
            "window {:?} created at ({}, {}), {} x {}",
            spec.title, spec.x, spec.y, spec.width, spec.height
        );
        Ok(window)
    }
}

impl Drop for System {
    fn drop(&mut self) {
        debug!("releasing SDL subsystems");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_lesson_two_at_100_100() {
        let spec = WindowSpec::default();
        assert_eq!(spec.title, "Lesson 2");
        assert_eq!((spec.x, spec.y), (100, 100));
        assert_eq!(spec.size(), Size::new(640, 480));
    }
}
