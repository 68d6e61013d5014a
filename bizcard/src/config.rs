// ABOUTME: Configuration file loading and hierarchical merging for bizcard
// ABOUTME: Reads optional TOML files from XDG locations and resolves avatar asset paths

use crate::constants::{assets, env as vars};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub image_path: Option<PathBuf>,
    #[serde(default)]
    pub ascii_path: Option<PathBuf>,
    /// Checked when the capability is resolved, so an unknown name only
    /// disables the override and keeps the rest of the file
    #[serde(default)]
    pub force_protocol: Option<String>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Self {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths)
    }

    /// Load configuration from file paths in order of precedence (highest first).
    ///
    /// Files that are missing or fail to parse are skipped.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut config = Config::default();

        // Apply lowest precedence first so higher ones override
        for path in paths.iter().rev() {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(file_config) => config = config.merge(file_config),
                Err(e) => log::warn!("Ignoring config file: {:#}", e),
            }
        }

        config
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Get standard config file paths in order of precedence (highest first)
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(assets::PROJECT_CONFIG_FILE));
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(
                PathBuf::from(config_home)
                    .join(assets::APP_DIR)
                    .join(assets::CONFIG_FILE),
            );
        }

        // 3. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join(assets::APP_DIR)
                    .join(assets::CONFIG_FILE),
            );
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            image_path: other.image_path.or(self.image_path),
            ascii_path: other.ascii_path.or(self.ascii_path),
            force_protocol: other.force_protocol.or(self.force_protocol),
        }
    }

    /// Path of the avatar image for this run
    pub fn image_path(&self) -> PathBuf {
        self.image_path
            .clone()
            .unwrap_or_else(|| assets_dir().join(assets::IMAGE_FILE))
    }

    /// Path of the text-art avatar for this run
    pub fn ascii_path(&self) -> PathBuf {
        self.ascii_path
            .clone()
            .unwrap_or_else(|| assets_dir().join(assets::ASCII_FILE))
    }
}

/// Directory holding the default avatar assets.
///
/// `BIZCARD_ASSETS_DIR` wins, then the platform data directory.
pub fn assets_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(vars::ASSETS_DIR).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .map(|dir| dir.join(assets::APP_DIR))
        .unwrap_or_else(|| PathBuf::from(assets::FALLBACK_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.image_path.is_none());
        assert!(config.ascii_path.is_none());
        assert!(config.force_protocol.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            image_path: Some(PathBuf::from("/base/avatar.png")),
            ascii_path: Some(PathBuf::from("/base/avatar.txt")),
            ..Default::default()
        };

        let override_config = Config {
            image_path: Some(PathBuf::from("/override/avatar.png")),
            force_protocol: Some("kitty".to_string()),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.image_path, Some(PathBuf::from("/override/avatar.png")));
        assert_eq!(merged.ascii_path, Some(PathBuf::from("/base/avatar.txt")));
        assert_eq!(merged.force_protocol, Some("kitty".to_string()));
    }

    #[test]
    fn test_explicit_paths_win_over_assets_dir() {
        let config = Config {
            image_path: Some(PathBuf::from("/somewhere/me.jpg")),
            ascii_path: Some(PathBuf::from("/somewhere/me.txt")),
            ..Default::default()
        };

        assert_eq!(config.image_path(), PathBuf::from("/somewhere/me.jpg"));
        assert_eq!(config.ascii_path(), PathBuf::from("/somewhere/me.txt"));
    }

    #[test]
    fn test_unknown_protocol_keeps_other_fields() {
        let config: Config = toml::from_str(
            r#"
            ascii_path = "/me/art.txt"
            force_protocol = "sixel"
        "#,
        )
        .expect("Unknown protocol names should still parse");

        assert_eq!(config.ascii_path, Some(PathBuf::from("/me/art.txt")));
        assert_eq!(config.force_protocol, Some("sixel".to_string()));
    }
}
