use sdl2::render::TextureValueError;
use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal failures of the setup sequence. Each one carries the diagnostic
/// SDL reported at the time of failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("SDL_Init error: {0}")]
    PlatformInit(String),

    #[error("CreateWindow error: {0}")]
    WindowCreate(String),

    #[error("CreateRenderer error: {0}")]
    RendererCreate(String),

    #[error("LoadBMP error: {message}")]
    ImageDecode { path: PathBuf, message: String },

    #[error("CreateTextureFromSurface error: {message}")]
    ImageUpload { path: PathBuf, message: String },
}

impl Error {
    // sdl2's builder errors display SDL failures as "SDL error: <msg>";
    // keep only <msg> so the line carries a single prefix.
    pub fn window_create(e: WindowBuildError) -> Self {
        Error::WindowCreate(match e {
            WindowBuildError::SdlError(msg) => msg,
            other => other.to_string(),
        })
    }

    pub fn renderer_create(e: IntegerOrSdlError) -> Self {
        Error::RendererCreate(match e {
            IntegerOrSdlError::SdlError(msg) => msg,
            other => other.to_string(),
        })
    }

    pub fn image_upload(path: &Path, e: TextureValueError) -> Self {
        Error::ImageUpload {
            path: path.to_path_buf(),
            message: match e {
                TextureValueError::SdlError(msg) => msg,
                other => other.to_string(),
            },
        }
    }

    /// Name of the platform call that failed.
    pub fn context(&self) -> &'static str {
        match self {
            Error::PlatformInit(_) => "SDL_Init",
            Error::WindowCreate(_) => "CreateWindow",
            Error::RendererCreate(_) => "CreateRenderer",
            Error::ImageDecode { .. } => "LoadBMP",
            Error::ImageUpload { .. } => "CreateTextureFromSurface",
        }
    }

    pub fn diagnostic(&self) -> &str {
        match self {
            Error::PlatformInit(msg) | Error::WindowCreate(msg) | Error::RendererCreate(msg) => msg,
            Error::ImageDecode { message, .. } | Error::ImageUpload { message, .. } => message,
        }
    }
}

impl Error {
    /// The asset file involved, for image failures.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::ImageDecode { path, .. } | Error::ImageUpload { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Writes `"<context> error: <diagnostic>"` as one line. A failing stream is ignored.
pub fn log_error<W: Write>(out: &mut W, err: &Error) {
    let _ = writeln!(out, "{err}");
}
