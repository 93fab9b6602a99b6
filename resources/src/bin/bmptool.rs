use clap::{Parser, Subcommand};
use resources::bmp::{self, Pixel, BMP};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Inspect BMP headers and generate the demo assets for tiled-overlay.
#[derive(Parser)]
#[command(name = "bmptool", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display the dimensions and layout stored in a .bmp header.
    Show {
        /// Bitmap file to inspect
        input: PathBuf,
    },
    /// Write background.bmp and image.bmp into a directory.
    Gen {
        /// Destination directory (must exist)
        dir: PathBuf,

        /// Background tile width; 320 tiles a 640 px window exactly
        #[arg(long, default_value_t = 320)]
        bg_width: usize,

        /// Background tile height; 240 tiles a 480 px window exactly
        #[arg(long, default_value_t = 240)]
        bg_height: usize,

        /// Side of the square foreground image
        #[arg(long, default_value_t = 100)]
        image_size: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Show { input } => show(&input),
        Command::Gen {
            dir,
            bg_width,
            bg_height,
            image_size,
        } => generate(&dir, bg_width, bg_height, image_size),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bmptool: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show(input: &Path) -> Result<(), String> {
    let info = bmp::probe(input).map_err(|e| format!("reading {input:?} failure: {e}"))?;
    let order = if info.top_down { "top-down" } else { "bottom-up" };
    println!(
        "{input:?}: {} x {}, {} bpp, {order}",
        info.width, info.height, info.bit_count
    );
    Ok(())
}

fn generate(dir: &Path, bg_width: usize, bg_height: usize, image_size: usize) -> Result<(), String> {
    if !dir.is_dir() {
        return Err(format!("{dir:?} is not a directory"));
    }

    let background = bmp::checkerboard(
        bg_width,
        bg_height,
        20,
        Pixel::rgb(40, 44, 52),
        Pixel::rgb(70, 76, 88),
    );
    let dst = dir.join("background.bmp");
    BMP::from_mem(bg_width, bg_height, &background)
        .to_file(&dst)
        .map_err(|e| format!("writing to {dst:?} error: {e}"))?;
    println!("{dst:?}: {bg_width} x {bg_height}");

    let image = bmp::framed(
        image_size,
        image_size,
        (image_size / 10).max(1),
        Pixel::rgb(230, 180, 40),
        Pixel::rgb(250, 250, 250),
    );
    let dst = dir.join("image.bmp");
    BMP::from_mem(image_size, image_size, &image)
        .to_file(&dst)
        .map_err(|e| format!("writing to {dst:?} error: {e}"))?;
    println!("{dst:?}: {image_size} x {image_size}");
    Ok(())
}
