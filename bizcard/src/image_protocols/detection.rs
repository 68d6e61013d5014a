// ABOUTME: Terminal capability detection for image protocol support
// ABOUTME: Classifies the host terminal as Kitty, iTerm2, or text-only from environment variables

use crate::cli_output::CliOutput;
use crate::constants::env as vars;
use std::env;
use std::fmt;

/// Image display capability of the host terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Kitty graphics protocol (chunked APC transmission)
    Kitty,
    /// iTerm2 inline images (single OSC 1337 directive)
    ITerm2,
    /// No known image protocol
    None,
}

impl Capability {
    /// Detect capability from the process environment
    pub fn detect() -> Self {
        Self::detect_with(|name| env::var(name).ok())
    }

    /// Detect capability using `lookup` to read environment variables.
    ///
    /// Kitty markers are checked first, so a terminal advertising both
    /// protocols resolves to `Kitty`.
    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let term = lookup(vars::TERM).unwrap_or_default();
        if lookup(vars::KITTY_WINDOW_ID).is_some() || term.contains(vars::KITTY_TERM_MARKER) {
            return Self::Kitty;
        }

        let term_program = lookup(vars::TERM_PROGRAM).unwrap_or_default();
        if lookup(vars::ITERM_SESSION_ID).is_some() || term_program == vars::ITERM_PROGRAM {
            return Self::ITerm2;
        }

        Self::None
    }

    /// Resolve the capability for this run, honoring overrides.
    ///
    /// `BIZCARD_FORCE_PROTOCOL` beats the configured value, which beats
    /// detection.
    pub fn resolve(configured: Option<&str>) -> Self {
        let forced = env::var(vars::FORCE_PROTOCOL).ok();
        let forced = forced
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or(configured);
        Self::resolve_with(forced, |name| env::var(name).ok())
    }

    pub fn resolve_with<F>(forced: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(protocol) = forced.map(str::trim).filter(|p| !p.is_empty()) {
            match Self::from_forced_protocol(protocol) {
                Some(capability) => {
                    log::debug!("Image protocol forced to {}", capability);
                    return capability;
                }
                None => CliOutput::new().warning(&format!(
                    "Unknown image protocol '{}', detecting instead. Valid values: kitty, iterm2, none",
                    protocol
                )),
            }
        }

        let capability = Self::detect_with(lookup);
        log::debug!("Detected image protocol: {}", capability);
        capability
    }

    /// Parse a forced protocol name
    pub fn from_forced_protocol(protocol: &str) -> Option<Self> {
        match protocol.to_lowercase().as_str() {
            "kitty" => Some(Self::Kitty),
            "iterm2" | "iterm" => Some(Self::ITerm2),
            "none" | "disable" | "disabled" => Some(Self::None),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Kitty => "kitty",
            Self::ITerm2 => "iterm2",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
