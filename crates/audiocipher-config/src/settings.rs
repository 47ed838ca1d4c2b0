//! User settings file.

use crate::{ConfigError, ScaleTable, paths};
use audiocipher_core::Scheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistent defaults for the command line.
///
/// # TOML Format
///
/// ```toml
/// default_scheme = "modulated"
/// default_scale = "C Major"
/// scales_file = "/home/me/scales.txt"
/// assets_dir = "/home/me/tones"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Scheme used when none is given.
    pub default_scheme: String,

    /// Scale used by the Morse codec when none is given.
    pub default_scale: String,

    /// Scale table file overriding the built-in table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales_file: Option<PathBuf>,

    /// Directory of exported tone assets to encode from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_scheme: Scheme::Modulated.name().to_string(),
            default_scale: "C Major".to_string(),
            scales_file: None,
            assets_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
    }

    /// The configured default scheme.
    pub fn scheme(&self) -> audiocipher_core::Result<Scheme> {
        self.default_scheme.parse()
    }

    /// Resolve the scale table.
    ///
    /// Order: `explicit`, then [`scales_file`](Self::scales_file), then the
    /// user scale file if it exists, then the factory table.
    pub fn scale_table(&self, explicit: Option<&Path>) -> Result<ScaleTable, ConfigError> {
        if let Some(path) = explicit.or(self.scales_file.as_deref()) {
            return ScaleTable::load(path);
        }
        let user = paths::user_scales_path();
        if user.exists() {
            return ScaleTable::load(user);
        }
        Ok(ScaleTable::factory())
    }
}
