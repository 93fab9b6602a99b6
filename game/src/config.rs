use backend::system::WindowSpec;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Tiles a background bitmap across a window, centres a second bitmap on
/// top, shows the frame for a while and exits.
#[derive(Parser, Debug)]
#[command(name = "tiled-overlay", version, about, long_about = None)]
pub struct Cli {
    /// Bitmap tiled 2x2 from the top-left corner
    #[arg(long, default_value = "background.bmp")]
    pub background: PathBuf,

    /// Bitmap drawn centred over the background
    #[arg(long, default_value = "image.bmp")]
    pub image: PathBuf,

    /// Window title
    #[arg(long, default_value = "Lesson 2")]
    pub title: String,

    /// Window width in pixels
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// How long the frame stays on screen, in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub hold_ms: u64,

    /// Log geometry and texture details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneConfig {
    pub window: WindowSpec,
    pub background: PathBuf,
    pub foreground: PathBuf,
    pub hold: Duration,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: WindowSpec::default(),
            background: PathBuf::from("background.bmp"),
            foreground: PathBuf::from("image.bmp"),
            hold: Duration::from_millis(10_000),
        }
    }
}

impl From<Cli> for SceneConfig {
    fn from(cli: Cli) -> Self {
        Self {
            window: WindowSpec {
                title: cli.title,
                width: cli.width,
                height: cli.height,
                ..WindowSpec::default()
            },
            background: cli.background,
            foreground: cli.image,
            hold: Duration::from_millis(cli.hold_ms),
        }
    }
}
