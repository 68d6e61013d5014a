// ABOUTME: Loader for the pre-rendered text-art avatar used when images are unavailable
// ABOUTME: Strips cursor visibility toggles and trailing whitespace while keeping trailing resets

use crate::ansi::cursor_visibility_sequences;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Trailing whitespace, optionally followed by an SGR reset and more whitespace
static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*(\x1b\[0?m)?\s*$").expect("trailing whitespace pattern is valid")
});

/// Read the text-art file at `path` and normalize it into display lines.
///
/// A missing or unreadable file yields no lines.
pub fn load_ascii(path: &Path) -> Vec<String> {
    match std::fs::read(path) {
        Ok(bytes) => normalize(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            log::debug!("No text-art avatar at {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Normalize raw text art: drop cursor visibility toggles and empty lines,
/// trim trailing whitespace but keep a reset code that followed it.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut text = raw.to_string();
    for sequence in cursor_visibility_sequences() {
        text = text.replace(&sequence, "");
    }

    text.lines()
        .filter(|line| !line.is_empty())
        .map(trim_line)
        .collect()
}

fn trim_line(line: &str) -> String {
    TRAILING_WHITESPACE.replace(line, "${1}").into_owned()
}
