//! XDG Base Directory utilities for locating pocdedup's global files.

use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`.
/// Falls back to the platform config directory when neither variable is set.
pub fn config_home() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Some(PathBuf::from(xdg_config_home));
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }

    directories::BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the global config file: `<config home>/pocdedup/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    config_home().map(|home| home.join("pocdedup").join("config.toml"))
}
