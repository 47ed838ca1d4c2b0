//! Platform-specific configuration paths.
//!
//! - **User config**: `~/.config/audiocipher/` (Linux),
//!   `~/Library/Application Support/audiocipher/` (macOS),
//!   `%APPDATA%\audiocipher\` (Windows)

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "audiocipher";

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// User scale table file name inside the config directory.
pub const SCALES_FILE: &str = "scales.txt";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default settings file path.
pub fn config_file_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}

/// Default user scale table path.
pub fn user_scales_path() -> PathBuf {
    user_config_dir().join(SCALES_FILE)
}
