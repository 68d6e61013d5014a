// ABOUTME: Library exports for bizcard modules for testing and the binary entry point
// ABOUTME: Wires configuration, terminal detection, avatar selection, and card rendering together

pub mod ansi;
pub mod ascii;
pub mod card;
pub mod cli_output;
pub mod config;
pub mod constants;
pub mod image_protocols;

use anyhow::{Context, Result};
use std::io::Write;

use crate::card::{Avatar, render_card};
use crate::config::Config;
use crate::image_protocols::Capability;

/// Build the card for the current environment
pub fn build_card() -> String {
    let config = Config::load();
    let capability = Capability::resolve(config.force_protocol.as_deref());

    let image_path = config.image_path();
    let ascii_path = config.ascii_path();
    log::debug!(
        "Avatar assets: image={} ascii={}",
        image_path.display(),
        ascii_path.display()
    );

    let avatar = Avatar::select(capability, &image_path, &ascii_path);
    render_card(&avatar)
}

/// Render the card and write it to stdout in one batch
pub fn run() -> Result<()> {
    let output = build_card();

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write card to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
