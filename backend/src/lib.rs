//! SDL2 platform layer for tiled-overlay: platform bring-up, window and
//! renderer creation, BMP texture loading and single-frame compositing.

pub mod compositor;
pub mod error;
pub mod math;
pub mod presenter;
pub mod renderer;
pub mod scene;
pub mod system;
pub mod texture;

pub use error::{Error, Result};
