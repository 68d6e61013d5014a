// ABOUTME: End-to-end tests that run the bizcard binary with a controlled environment
// ABOUTME: Verifies the printed card and avatar overlay for each terminal capability

use base64::{Engine, engine::general_purpose::STANDARD};
use bizcard::card::render_box;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run the binary with only the given variables set, from inside `home`
fn run_card(home: &Path, vars: &[(&str, &str)]) -> String {
    run_card_with_stderr(home, vars).0
}

/// Like `run_card`, also returning what was written to stderr
fn run_card_with_stderr(home: &Path, vars: &[(&str, &str)]) -> (String, String) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bizcard"));
    cmd.env_clear()
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("BIZCARD_ASSETS_DIR", home.join("assets"));
    for (key, value) in vars {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Should run bizcard");
    assert!(output.status.success(), "bizcard should always exit 0");
    (
        String::from_utf8(output.stdout).expect("Card should be UTF-8"),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn write_assets(home: &Path, image: Option<&[u8]>, ascii: Option<&str>) {
    let assets = home.join("assets");
    std::fs::create_dir_all(&assets).expect("Should create assets dir");
    if let Some(image) = image {
        std::fs::write(assets.join("avatar.png"), image).expect("Should write image");
    }
    if let Some(ascii) = ascii {
        std::fs::write(assets.join("avatar.txt"), ascii).expect("Should write text art");
    }
}

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n-not-a-real-image-but-png-signed-";

#[test]
fn test_plain_terminal_without_assets_prints_only_the_box() {
    let home = TempDir::new().expect("Should create temp dir");

    let output = run_card(home.path(), &[]);
    assert_eq!(output, render_box());
}

#[test]
fn test_graphical_terminal_without_assets_prints_only_the_box() {
    let home = TempDir::new().expect("Should create temp dir");

    let output = run_card(home.path(), &[("KITTY_WINDOW_ID", "1")]);
    assert_eq!(output, render_box());
}

#[test]
fn test_kitty_terminal_overlays_chunked_image() {
    let home = TempDir::new().expect("Should create temp dir");
    write_assets(home.path(), Some(PNG_BYTES), None);

    let output = run_card(home.path(), &[("TERM", "xterm-kitty")]);
    let overlay = output
        .strip_prefix(render_box().as_str())
        .expect("Card should start with the box");

    assert!(overlay.starts_with("\x1b[10A\x1b[3C\x1b_Ga=T,f=100,c=18,r=8,q=2,m=0;"));
    assert!(overlay.contains(&STANDARD.encode(PNG_BYTES)));
    assert!(overlay.ends_with("\x1b\\\x1b[3B\x1b[1G"));
}

#[test]
fn test_iterm2_terminal_overlays_inline_image() {
    let home = TempDir::new().expect("Should create temp dir");
    write_assets(home.path(), Some(PNG_BYTES), None);

    let output = run_card(home.path(), &[("TERM_PROGRAM", "iTerm.app")]);
    let overlay = output
        .strip_prefix(render_box().as_str())
        .expect("Card should start with the box");

    assert!(overlay.starts_with("\x1b[10A\x1b[3C\x1b]1337;File=inline=1;"));
    assert!(overlay.contains("width=18;height=8"));
    assert!(overlay.ends_with("\x07\x1b[3B\x1b[1G"));
}

#[test]
fn test_kitty_wins_over_iterm2() {
    let home = TempDir::new().expect("Should create temp dir");
    write_assets(home.path(), Some(PNG_BYTES), None);

    let output = run_card(
        home.path(),
        &[("KITTY_WINDOW_ID", "7"), ("ITERM_SESSION_ID", "w0t0p0")],
    );
    assert!(output.contains("\x1b_Ga=T"));
    assert!(!output.contains("\x1b]1337;"));
}

#[test]
fn test_plain_terminal_uses_text_art() {
    let home = TempDir::new().expect("Should create temp dir");
    write_assets(
        home.path(),
        Some(PNG_BYTES),
        Some("\x1b[?25l\x1b[31m/\\_/\\  \x1b[0m\n( o.o )\n\n > ^ <\n  art \nextra\n\x1b[?25h"),
    );

    let output = run_card(home.path(), &[("TERM", "xterm-256color")]);
    let overlay = output
        .strip_prefix(render_box().as_str())
        .expect("Card should start with the box");

    assert_eq!(
        overlay,
        concat!(
            "\x1b[8A",
            "\x1b[3C\x1b[31m/\\_/\\\x1b[0m\x1b[1G\x1b[1B",
            "\x1b[3C( o.o )\x1b[1G\x1b[1B",
            "\x1b[3C > ^ <\x1b[1G\x1b[1B",
            "\x1b[3C  art\x1b[1G\x1b[1B",
            "\x1b[4B\x1b[1G",
        )
    );
}

#[test]
fn test_sparse_text_art_is_skipped() {
    let home = TempDir::new().expect("Should create temp dir");
    write_assets(home.path(), None, Some("one\n\ntwo\n\nthree\n"));

    let output = run_card(home.path(), &[]);
    assert_eq!(output, render_box());
}

#[test]
fn test_forced_protocol_from_env() {
    let home = TempDir::new().expect("Should create temp dir");
    write_assets(home.path(), Some(PNG_BYTES), None);

    let output = run_card(home.path(), &[("BIZCARD_FORCE_PROTOCOL", "iterm2")]);
    assert!(output.contains("\x1b]1337;File="));

    let output = run_card(
        home.path(),
        &[("BIZCARD_FORCE_PROTOCOL", "none"), ("KITTY_WINDOW_ID", "1")],
    );
    assert_eq!(output, render_box());
}

#[test]
fn test_project_config_selects_assets() {
    let home = TempDir::new().expect("Should create temp dir");
    let art = home.path().join("me.txt");
    std::fs::write(&art, "1\n2\n3\n4\n").expect("Should write text art");
    std::fs::write(
        home.path().join("bizcard.toml"),
        format!("ascii_path = {:?}\n", art.display().to_string()),
    )
    .expect("Should write config");

    let output = run_card(home.path(), &[]);
    assert!(output.ends_with("\x1b[3C4\x1b[1G\x1b[1B\x1b[4B\x1b[1G"));
}

#[test]
fn test_unknown_config_protocol_warns_and_keeps_assets() {
    let home = TempDir::new().expect("Should create temp dir");
    let art = home.path().join("me.txt");
    std::fs::write(&art, "1\n2\n3\n4\n").expect("Should write text art");
    std::fs::write(
        home.path().join("bizcard.toml"),
        format!(
            "ascii_path = {:?}\nforce_protocol = \"sixel\"\n",
            art.display().to_string()
        ),
    )
    .expect("Should write config");

    let (output, stderr) = run_card_with_stderr(home.path(), &[]);
    assert!(output.ends_with("\x1b[3C4\x1b[1G\x1b[1B\x1b[4B\x1b[1G"));
    assert!(stderr.contains("warning:"), "stderr was: {}", stderr);
    assert!(stderr.contains("sixel"), "stderr was: {}", stderr);
}

#[test]
fn test_blank_env_protocol_keeps_configured_protocol() {
    let home = TempDir::new().expect("Should create temp dir");
    write_assets(home.path(), Some(PNG_BYTES), None);
    std::fs::write(home.path().join("bizcard.toml"), "force_protocol = \"iterm2\"\n")
        .expect("Should write config");

    let output = run_card(home.path(), &[("BIZCARD_FORCE_PROTOCOL", "")]);
    assert!(output.contains("\x1b]1337;File="));
}
