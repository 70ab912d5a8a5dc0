//! Where bindery keeps its files
//!
//! Everything lives in one directory:
//!
//! ```text
//! <config dir>/bindery/
//!   config.yaml     game settings (GameConfig)
//!   keymap.json     user key bindings
//!   logs/           daily rotated bindery.log.YYYY-MM-DD
//! ```
//!
//! `<config dir>` is `$BINDERY_CONFIG_DIR` when set (used as-is, like the
//! game's `--configdir`), else `$XDG_CONFIG_HOME` or `~/.config` on Unix and
//! `%APPDATA%` on Windows.

use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "bindery";

/// Environment variable naming a complete config directory
pub const CONFIG_DIR_ENV: &str = "BINDERY_CONFIG_DIR";

/// File name prefix of the rotated log files
pub const LOG_FILE_PREFIX: &str = "bindery.log";

pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(
        env::var_os(CONFIG_DIR_ENV),
        platform_config_root(),
    )
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|xdg| !xdg.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

fn resolve_config_dir(explicit: Option<OsString>, platform_root: Option<PathBuf>) -> Option<PathBuf> {
    match explicit.filter(|dir| !dir.is_empty()) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => platform_root.map(|root| root.join(APP_DIR)),
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keymap.json"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Today's log file, or the path it will get once something is logged
pub fn log_file() -> Option<PathBuf> {
    let logs = logs_dir()?;
    newest_log(&logs).or_else(|| Some(logs.join(LOG_FILE_PREFIX)))
}

// Rotated names end in YYYY-MM-DD, so the newest sorts last
fn newest_log(logs: &Path) -> Option<PathBuf> {
    fs::read_dir(logs)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        .max()
}

/// Create the logs directory (and the config dir above it) if needed
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
