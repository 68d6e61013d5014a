// ABOUTME: Centralized constants for the bizcard application
// ABOUTME: Contains palette, card geometry, protocol limits, env names, and terminal sequences

use owo_colors::Rgb;

/// 24-bit gradient used for the card border and accents.
///
/// Runs from warm pink through violet into cyan; the top border sweeps it
/// forward and the bottom border sweeps it back.
pub const PALETTE: [Rgb; 20] = [
    Rgb(255, 95, 135),
    Rgb(251, 96, 146),
    Rgb(246, 98, 158),
    Rgb(240, 100, 170),
    Rgb(233, 103, 182),
    Rgb(225, 106, 194),
    Rgb(215, 110, 206),
    Rgb(204, 114, 217),
    Rgb(192, 119, 227),
    Rgb(179, 125, 236),
    Rgb(166, 131, 244),
    Rgb(153, 138, 250),
    Rgb(140, 146, 254),
    Rgb(128, 154, 255),
    Rgb(117, 163, 255),
    Rgb(108, 172, 255),
    Rgb(101, 182, 255),
    Rgb(97, 192, 255),
    Rgb(95, 203, 255),
    Rgb(95, 215, 255),
];

/// Card layout dimensions, in terminal cells
pub mod layout {
    /// Cells between the left and right border
    pub const INNER_WIDTH: usize = 64;

    /// Content rows between the top and bottom border
    pub const CONTENT_ROWS: usize = 10;

    /// Lines the card occupies, borders included
    pub const BOX_HEIGHT: u16 = CONTENT_ROWS as u16 + 2;

    /// Blank cells reserved left of the text column for the avatar
    pub const AVATAR_AREA_WIDTH: usize = 22;

    /// Blank cells kept between the text column and the right border
    pub const RIGHT_PADDING: usize = 2;

    /// Columns to move right from column 1 before drawing the avatar
    pub const AVATAR_OFFSET_X: u16 = 3;

    /// Rows to move up from the line below the card to the image's top row
    pub const AVATAR_OFFSET_Y: u16 = 10;

    /// Image size handed to the terminal
    pub const IMAGE_COLUMNS: u16 = 18;
    pub const IMAGE_ROWS: u16 = 8;

    /// Lines of the text-art avatar
    pub const ASCII_LINES: usize = 4;

    /// Rows to move up from the line below the card to the text-art avatar's top row
    pub const ASCII_OFFSET_Y: u16 = AVATAR_OFFSET_Y - 2;
}

/// Image protocol limits
pub mod protocol {
    /// Base64 bytes per Kitty graphics chunk.
    ///
    /// Fixed at 4096 (a multiple of 4) so every escape sequence stays within
    /// terminal input buffers.
    pub const KITTY_CHUNK_SIZE: usize = 4096;

    /// Kitty payload format code for PNG data
    pub const KITTY_FORMAT_PNG: u32 = 100;
}

/// Environment variables consulted at startup
pub mod env {
    pub const KITTY_WINDOW_ID: &str = "KITTY_WINDOW_ID";
    pub const TERM: &str = "TERM";
    pub const ITERM_SESSION_ID: &str = "ITERM_SESSION_ID";
    pub const TERM_PROGRAM: &str = "TERM_PROGRAM";

    /// Substring of `TERM` that identifies Kitty
    pub const KITTY_TERM_MARKER: &str = "kitty";

    /// Exact `TERM_PROGRAM` value set by iTerm2
    pub const ITERM_PROGRAM: &str = "iTerm.app";

    /// Overrides terminal detection: kitty, iterm2, none
    pub const FORCE_PROTOCOL: &str = "BIZCARD_FORCE_PROTOCOL";

    /// Directory holding avatar.png and avatar.txt
    pub const ASSETS_DIR: &str = "BIZCARD_ASSETS_DIR";
}

/// Asset file names and locations
pub mod assets {
    pub const APP_DIR: &str = "bizcard";
    pub const IMAGE_FILE: &str = "avatar.png";
    pub const ASCII_FILE: &str = "avatar.txt";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const PROJECT_CONFIG_FILE: &str = "bizcard.toml";

    /// Used when no data directory can be determined
    pub const FALLBACK_DIR: &str = "assets";
}

/// Raw terminal sequences not covered by crossterm commands
pub mod sequences {
    /// SGR reset forms that may close a text-art line
    pub const RESET: &str = "\x1b[0m";
    pub const RESET_SHORT: &str = "\x1b[m";

    /// OSC 8 hyperlink opener and closer
    pub const OSC8_OPEN: &str = "\x1b]8;;";
    pub const OSC8_CLOSE: &str = "\x1b]8;;\x1b\\";

    /// String terminator
    pub const ST: &str = "\x1b\\";

    /// Kitty graphics APC introducer
    pub const KITTY_APC: &str = "\x1b_G";

    /// iTerm2 inline file OSC introducer
    pub const ITERM2_FILE: &str = "\x1b]1337;File=";

    pub const BEL: &str = "\x07";
}
