// ABOUTME: Helpers for turning crossterm commands and styled text into escape strings
// ABOUTME: The card is built as one String, so commands are rendered rather than executed

use crate::constants::sequences::{OSC8_CLOSE, OSC8_OPEN, ST};
use crossterm::Command;
use crossterm::cursor::{Hide, MoveDown, MoveRight, MoveToColumn, MoveUp, Show};

/// Append the ANSI form of `command` to `out`
pub fn push_command<C: Command>(out: &mut String, command: C) {
    // Writing into a String cannot fail
    let _ = command.write_ansi(out);
}

pub fn command_string<C: Command>(command: C) -> String {
    let mut out = String::new();
    push_command(&mut out, command);
    out
}

/// Cursor movement relative to the current position. A zero distance emits nothing.
pub fn up(out: &mut String, rows: u16) {
    if rows > 0 {
        push_command(out, MoveUp(rows));
    }
}

pub fn down(out: &mut String, rows: u16) {
    if rows > 0 {
        push_command(out, MoveDown(rows));
    }
}

pub fn right(out: &mut String, columns: u16) {
    if columns > 0 {
        push_command(out, MoveRight(columns));
    }
}

/// Move to column 1 of the current row
pub fn column_one(out: &mut String) {
    push_command(out, MoveToColumn(0));
}

/// Sequences that toggle cursor visibility
pub fn cursor_visibility_sequences() -> [String; 2] {
    [command_string(Hide), command_string(Show)]
}

/// Wrap `label` in an OSC 8 hyperlink to `url`
pub fn hyperlink(url: &str, label: &str) -> String {
    format!("{}{}{}{}{}", OSC8_OPEN, url, ST, label, OSC8_CLOSE)
}
