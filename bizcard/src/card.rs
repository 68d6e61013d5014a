// ABOUTME: Card layout: the gradient-bordered box and the avatar overlay drawn on top of it
// ABOUTME: The box is static; the avatar is positioned with relative cursor movement after printing

use crate::ansi::{self, hyperlink};
use crate::ascii::load_ascii;
use crate::constants::PALETTE;
use crate::constants::layout::*;
use crate::image_protocols::{Capability, encode_file};
use owo_colors::{OwoColorize, Rgb};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// A piece of card text with its styling
#[derive(Debug, Clone, Copy)]
enum Span {
    Text(&'static str),
    Name(&'static str),
    Muted(&'static str),
    Link {
        label: &'static str,
        url: &'static str,
    },
}

impl Span {
    fn label(&self) -> &'static str {
        match *self {
            Span::Text(text) | Span::Name(text) | Span::Muted(text) => text,
            Span::Link { label, .. } => label,
        }
    }

    fn render(&self) -> String {
        match self {
            Span::Text(text) => text.to_string(),
            Span::Name(text) => text.color(PALETTE[0]).bold().to_string(),
            Span::Muted(text) => text.dimmed().to_string(),
            Span::Link { label, url } => {
                hyperlink(url, &label.color(PALETTE[13]).underline().to_string())
            }
        }
    }
}

/// Text rows inside the border, top to bottom
const CONTENT: [&[Span]; CONTENT_ROWS] = [
    &[],
    &[Span::Name("Trevor Strieber")],
    &[Span::Muted("Software engineer · Rust · terminals")],
    &[],
    &[Span::Text("Builds fast command-line tools and")],
    &[Span::Text("developer tooling in Rust.")],
    &[],
    &[
        Span::Muted("GitHub    "),
        Span::Link {
            label: "github.com/TrevorS",
            url: "https://github.com/TrevorS",
        },
    ],
    &[
        Span::Muted("Project   "),
        Span::Link {
            label: "linear-cli",
            url: "https://github.com/TrevorS/linear-cli",
        },
    ],
    &[],
];

/// What gets drawn in the avatar area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// Encoded image escape sequences
    Image(String),
    /// Text-art lines, exactly `ASCII_LINES` of them
    Ascii(Vec<String>),
    /// Nothing to draw
    Absent,
}

impl Avatar {
    /// Pick the avatar for this run.
    ///
    /// An image is used when the terminal supports one and the file encodes;
    /// otherwise the text art is tried.
    pub fn select(capability: Capability, image_path: &Path, ascii_path: &Path) -> Self {
        let payload = encode_file(capability, image_path, IMAGE_COLUMNS, IMAGE_ROWS);
        if !payload.is_empty() {
            log::debug!("Using {} image avatar from {}", capability, image_path.display());
            return Avatar::Image(payload);
        }

        Self::from_parts(String::new(), load_ascii(ascii_path))
    }

    /// Build an avatar from an encoded payload and text-art lines
    pub fn from_parts(payload: String, mut lines: Vec<String>) -> Self {
        if !payload.is_empty() {
            return Avatar::Image(payload);
        }

        if lines.len() < ASCII_LINES {
            log::debug!(
                "Skipping avatar overlay: {} text-art lines, need {}",
                lines.len(),
                ASCII_LINES
            );
            return Avatar::Absent;
        }

        lines.truncate(ASCII_LINES);
        Avatar::Ascii(lines)
    }
}

/// The static bordered box, one `\n`-terminated line per row
pub fn render_box() -> String {
    let mut out = String::new();

    out.push_str(&horizontal_border('╭', '╮', false));
    for (i, spans) in CONTENT.iter().enumerate() {
        out.push_str(&content_row(i + 1, spans));
    }
    out.push_str(&horizontal_border('╰', '╯', true));

    out
}

/// Cursor movements and payload that draw `avatar` over an already printed box.
///
/// Expects the cursor on the line below the box and leaves it there, at column 1.
pub fn render_overlay(avatar: &Avatar) -> String {
    let mut out = String::new();

    match avatar {
        Avatar::Image(payload) => {
            ansi::up(&mut out, AVATAR_OFFSET_Y);
            ansi::right(&mut out, AVATAR_OFFSET_X);
            out.push_str(payload);
            // Terminals leave the cursor on the image's last row
            ansi::down(&mut out, AVATAR_OFFSET_Y - (IMAGE_ROWS - 1));
            ansi::column_one(&mut out);
        }
        Avatar::Ascii(lines) => {
            ansi::up(&mut out, ASCII_OFFSET_Y);
            for line in lines.iter().take(ASCII_LINES) {
                ansi::right(&mut out, AVATAR_OFFSET_X);
                out.push_str(line);
                ansi::column_one(&mut out);
                ansi::down(&mut out, 1);
            }
            ansi::down(&mut out, ASCII_OFFSET_Y - ASCII_LINES as u16);
            ansi::column_one(&mut out);
        }
        Avatar::Absent => {}
    }

    out
}

/// The full card: box followed by the avatar overlay
pub fn render_card(avatar: &Avatar) -> String {
    let mut out = render_box();
    out.push_str(&render_overlay(avatar));
    out
}

fn horizontal_border(left: char, right: char, reversed: bool) -> String {
    let shade = |i: usize| {
        if reversed {
            PALETTE[PALETTE.len() - 1 - i]
        } else {
            PALETTE[i]
        }
    };
    let last = PALETTE.len() - 1;

    let mut line = paint(&left.to_string(), shade(0));
    let segments = PALETTE.len();
    for i in 0..segments {
        let start = i * INNER_WIDTH / segments;
        let end = (i + 1) * INNER_WIDTH / segments;
        line.push_str(&paint(&"─".repeat(end - start), shade(i)));
    }
    line.push_str(&paint(&right.to_string(), shade(last)));
    line.push('\n');
    line
}

fn content_row(row: usize, spans: &[Span]) -> String {
    let last = PALETTE.len() - 1;
    let shade = row * last / (BOX_HEIGHT as usize - 1);

    let width: usize = spans.iter().map(|span| span.label().width()).sum();
    let text_width = INNER_WIDTH - AVATAR_AREA_WIDTH;

    let mut line = paint("│", PALETTE[shade]);
    line.push_str(&" ".repeat(AVATAR_AREA_WIDTH));
    for span in spans {
        line.push_str(&span.render());
    }
    line.push_str(&" ".repeat(text_width.saturating_sub(width)));
    line.push_str(&paint("│", PALETTE[last - shade]));
    line.push('\n');
    line
}

fn paint(text: &str, color: Rgb) -> String {
    text.color(color).to_string()
}
