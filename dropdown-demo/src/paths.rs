//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "dropdown";
const APPLICATION: &str = "dropdown-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/dropdown-demo` or `~/.cache/dropdown-demo`
/// - macOS: `~/Library/Caches/dev.dropdown.dropdown-demo`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory for configuration files.
///
/// - Linux: `$XDG_CONFIG_HOME/dropdown-demo` or `~/.config/dropdown-demo`
/// - macOS: `~/Library/Application Support/dev.dropdown.dropdown-demo`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Get the path to the dropdown config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("dropdown.toml"))
}
