// ABOUTME: Image format conversion for protocols that only accept PNG payloads
// ABOUTME: Passes PNG data through untouched and re-encodes anything else the image crate can decode

use anyhow::{Result, anyhow};
use image::ImageFormat;
use std::borrow::Cow;
use std::io::Cursor;

/// PNG signature: 89 50 4E 47 0D 0A 1A 0A
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn is_png(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/// Return `data` as PNG, converting when needed
pub fn ensure_png(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    if is_png(data) {
        return Ok(Cow::Borrowed(data));
    }

    let format_str = image::guess_format(data)
        .map(format_name)
        .unwrap_or("unknown");
    log::debug!("Converting avatar from {} to png", format_str);

    let img = image::load_from_memory(data)
        .map_err(|e| anyhow!("Failed to load image for conversion: {}", e))?;

    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| anyhow!("Failed to encode image as png: {}", e))?;

    Ok(Cow::Owned(output))
}

fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Gif => "gif",
        ImageFormat::WebP => "webp",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        _ => "other",
    }
}
