// ABOUTME: Image protocol implementations for terminal inline image display
// ABOUTME: Selects an encoder by capability and turns an image file into escape sequences

use anyhow::{Context, Result};
use std::path::Path;

pub trait ImageProtocol {
    /// Render image data as terminal escape sequences sized to `columns` x `rows` cells
    fn render_image(&self, data: &[u8], columns: u16, rows: u16) -> Result<String>;
}

pub mod conversion;
pub mod detection;
pub mod iterm2;
pub mod kitty;

pub use detection::Capability;
pub use iterm2::ITerm2Protocol;
pub use kitty::KittyProtocol;

impl Capability {
    /// Encoder for this capability, if the terminal can show images
    pub fn protocol(&self) -> Option<Box<dyn ImageProtocol>> {
        match self {
            Self::Kitty => Some(Box::new(KittyProtocol)),
            Self::ITerm2 => Some(Box::new(ITerm2Protocol)),
            Self::None => None,
        }
    }
}

/// Encode the image at `path` for `capability`.
///
/// Returns an empty string when the terminal has no image protocol, the file
/// is missing, or the image cannot be encoded.
pub fn encode_file(capability: Capability, path: &Path, columns: u16, rows: u16) -> String {
    let Some(protocol) = capability.protocol() else {
        return String::new();
    };

    if !path.exists() {
        log::debug!("No avatar image at {}", path.display());
        return String::new();
    }

    match read_and_render(protocol.as_ref(), path, columns, rows) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Skipping avatar image: {:#}", e);
            String::new()
        }
    }
}

fn read_and_render(
    protocol: &dyn ImageProtocol,
    path: &Path,
    columns: u16,
    rows: u16,
) -> Result<String> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    protocol.render_image(&data, columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_encodes_to_empty() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("missing.png");

        assert_eq!(encode_file(Capability::Kitty, &path, 18, 8), "");
        assert_eq!(encode_file(Capability::ITerm2, &path, 18, 8), "");
    }

    #[test]
    fn test_no_protocol_encodes_to_empty() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("avatar.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nrest").expect("Should write image");

        assert_eq!(encode_file(Capability::None, &path, 18, 8), "");
    }

    #[test]
    fn test_existing_file_is_encoded() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("avatar.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nrest").expect("Should write image");

        let kitty = encode_file(Capability::Kitty, &path, 18, 8);
        assert!(kitty.starts_with("\x1b_G"));

        let iterm2 = encode_file(Capability::ITerm2, &path, 18, 8);
        assert!(iterm2.starts_with("\x1b]1337;File="));
    }

    #[test]
    fn test_protocol_selection() {
        assert!(Capability::Kitty.protocol().is_some());
        assert!(Capability::ITerm2.protocol().is_some());
        assert!(Capability::None.protocol().is_none());
    }
}
