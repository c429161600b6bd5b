//! Centralized configuration paths for livepen
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/livepen/`
//! - Windows: `%APPDATA%\livepen\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "livepen";

/// Base config directory for livepen
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/livepen`
///   - Else: `~/.config/livepen`
///
/// Windows:
///   - `%APPDATA%\livepen`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/livepen/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/livepen/projects.json`
pub fn projects_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("projects.json"))
}

/// `~/.config/livepen/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
