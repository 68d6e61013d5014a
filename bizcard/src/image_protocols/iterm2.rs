// ABOUTME: iTerm2 terminal inline image protocol implementation
// ABOUTME: Handles base64 encoding with iTerm2-specific escape sequences

use super::ImageProtocol;
use crate::constants::sequences::{BEL, ITERM2_FILE};
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine};

pub struct ITerm2Protocol;

impl ImageProtocol for ITerm2Protocol {
    fn render_image(&self, data: &[u8], columns: u16, rows: u16) -> Result<String> {
        let base64_data = STANDARD.encode(data);

        // ITerm2 inline image format, width and height in character cells:
        // \x1b]1337;File=inline=1;size=N;width=C;height=R;preserveAspectRatio=1:base64data\x07
        Ok(format!(
            "{}inline=1;size={};width={};height={};preserveAspectRatio=1:{}{}",
            ITERM2_FILE,
            data.len(),
            columns,
            rows,
            base64_data,
            BEL
        ))
    }
}
