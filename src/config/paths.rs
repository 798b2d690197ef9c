// Filesystem path utilities.
// Locates the config file, the log file, and the default picture directory.

use std::env;
use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SNAPTODO_CONFIG";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "snaptodo")
}

/// Get the config directory (~/.config/snaptodo on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory (~/.cache/snaptodo on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the config file, honoring `SNAPTODO_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir().map(|dir| dir.join("config.json")),
    }
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("snaptodo.log"))
}

/// Directory the browse picker opens when none is configured.
pub fn default_browse_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.picture_dir().map(|p| p.to_path_buf()))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("."))
}
