// ABOUTME: Kitty terminal graphics protocol implementation
// ABOUTME: Handles base64 encoding and chunking according to Kitty spec

use super::ImageProtocol;
use super::conversion::ensure_png;
use crate::constants::protocol::{KITTY_CHUNK_SIZE, KITTY_FORMAT_PNG};
use crate::constants::sequences::{KITTY_APC, ST};
use anyhow::{Result, anyhow};
use base64::{Engine, engine::general_purpose::STANDARD};

pub struct KittyProtocol;

impl ImageProtocol for KittyProtocol {
    fn render_image(&self, data: &[u8], columns: u16, rows: u16) -> Result<String> {
        let png = ensure_png(data)?;
        let base64_data = STANDARD.encode(png.as_ref());
        encode_chunks(&base64_data, columns, rows)
    }
}

/// Split base64 text into Kitty transmit-and-display commands.
///
/// The first command carries the action, format, and cell size; the rest
/// only carry `m`, which is 0 on the final chunk alone.
pub fn encode_chunks(base64_data: &str, columns: u16, rows: u16) -> Result<String> {
    let chunks: Result<Vec<&str>, _> = base64_data
        .as_bytes()
        .chunks(KITTY_CHUNK_SIZE)
        .map(std::str::from_utf8)
        .collect();
    let chunks =
        chunks.map_err(|e| anyhow!("Failed to convert base64 chunk to UTF-8: {}", e))?;

    let mut output = String::with_capacity(base64_data.len() + chunks.len() * 16);

    for (i, chunk) in chunks.iter().enumerate() {
        let m_value = if i + 1 == chunks.len() { 0 } else { 1 };

        if i == 0 {
            output.push_str(&format!(
                "{}a=T,f={},c={},r={},q=2,m={};{}{}",
                KITTY_APC, KITTY_FORMAT_PNG, columns, rows, m_value, chunk, ST
            ));
        } else {
            output.push_str(&format!("{}m={};{}{}", KITTY_APC, m_value, chunk, ST));
        }
    }

    Ok(output)
}
