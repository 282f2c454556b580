//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/foody-e2e/`
//! - macOS: `~/Library/Application Support/foody-e2e/`
//! - Windows: `%APPDATA%\foody-e2e\`

use std::path::PathBuf;

/// Name used for the configuration directory
const APP_NAME: &str = "foody-e2e";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
