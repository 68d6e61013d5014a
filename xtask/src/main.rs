// ABOUTME: xtask binary for build automation and avatar asset preparation
// ABOUTME: Renders the text-art fallback from an image and installs avatar assets

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Text lines the card reserves for the text-art avatar
const ASCII_LINES: u32 = 4;

/// Alpha below which a pixel is treated as transparent
const ALPHA_CUTOFF: u8 = 128;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for bizcard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image as 4 lines of truecolor half-block text art
    Ascii {
        /// Source image (png, jpeg, gif, webp, tiff, bmp)
        image: PathBuf,

        /// Width of the text art in columns
        #[arg(long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..=18))]
        width: u32,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Copy an image into the asset directory and generate its text art
    Install {
        /// Source image
        image: PathBuf,

        /// Asset directory (defaults to BIZCARD_ASSETS_DIR or the data directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Width of the text art in columns
        #[arg(long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..=18))]
        width: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ascii {
            image,
            width,
            output,
        } => {
            let art = render_ascii(&image, width)?;
            match output {
                Some(path) => {
                    fs::write(&path, art)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote text art to {}", path.display());
                }
                None => print!("{}", art),
            }
        }
        Commands::Install { image, dir, width } => {
            let dir = dir.unwrap_or_else(default_assets_dir);
            install(&image, &dir, width)?;
        }
    }

    Ok(())
}

fn default_assets_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("BIZCARD_ASSETS_DIR").filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .map(|dir| dir.join("bizcard"))
        .unwrap_or_else(|| PathBuf::from("assets"))
}

fn install(image_path: &Path, dir: &Path, width: u32) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create asset directory {}", dir.display()))?;

    println!("Installing avatar into {}...", dir.display());

    // The card reads avatar.png; store PNG regardless of the source format
    let img = image::open(image_path)
        .with_context(|| format!("Failed to open image {}", image_path.display()))?;
    let image_target = dir.join("avatar.png");
    img.save_with_format(&image_target, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", image_target.display()))?;

    let art = render_ascii(image_path, width)?;
    let ascii_target = dir.join("avatar.txt");
    fs::write(&ascii_target, art)
        .with_context(|| format!("Failed to write {}", ascii_target.display()))?;

    println!("Avatar installed: {}", image_target.display());
    println!("Text art installed: {}", ascii_target.display());
    Ok(())
}

fn render_ascii(image_path: &Path, width: u32) -> Result<String> {
    let img = image::open(image_path)
        .with_context(|| format!("Failed to open image {}", image_path.display()))?;

    // Each text line shows two pixel rows via half blocks
    let pixels = img
        .resize_exact(width, ASCII_LINES * 2, FilterType::Lanczos3)
        .to_rgba8();

    Ok(half_blocks(&pixels))
}

fn half_blocks(pixels: &RgbaImage) -> String {
    let mut out = String::new();

    for row in 0..pixels.height() / 2 {
        for x in 0..pixels.width() {
            let top = pixels.get_pixel(x, row * 2);
            let bottom = pixels.get_pixel(x, row * 2 + 1);
            push_cell(&mut out, top, bottom);
        }
        out.push_str("\x1b[0m\n");
    }

    out
}

fn push_cell(out: &mut String, top: &Rgba<u8>, bottom: &Rgba<u8>) {
    let opaque = |p: &Rgba<u8>| p[3] >= ALPHA_CUTOFF;

    // Writing into a String cannot fail
    let _ = match (opaque(top), opaque(bottom)) {
        (true, true) => write!(
            out,
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
            top[0], top[1], top[2], bottom[0], bottom[1], bottom[2]
        ),
        (true, false) => write!(out, "\x1b[49m\x1b[38;2;{};{};{}m▀", top[0], top[1], top[2]),
        (false, true) => write!(
            out,
            "\x1b[49m\x1b[38;2;{};{};{}m▄",
            bottom[0], bottom[1], bottom[2]
        ),
        (false, false) => write!(out, "\x1b[0m "),
    };
}
