//! Configuration for audiocipher: settings and musical scale tables.
//!
//! # Features
//!
//! - **Settings**: TOML defaults for scheme, scale, scale file and assets
//! - **Scale tables**: `Name: f1, ..., f8` text tables and a factory table
//! - **Paths**: Platform-specific config directory
//!
//! # Example
//!
//! ```rust
//! use audiocipher_config::{ScaleTable, Settings};
//!
//! let settings = Settings::default();
//! let table = ScaleTable::factory();
//! let scale = table.get(&settings.default_scale).unwrap();
//! assert_eq!(scale.name(), "C Major");
//! ```

mod error;
mod scale_table;
mod settings;

/// Platform-specific configuration paths.
pub mod paths;

pub use error::ConfigError;
pub use paths::{config_file_path, user_config_dir, user_scales_path};
pub use scale_table::{FACTORY_SCALES, ScaleTable};
pub use settings::Settings;

/// Names of the scales in the user's scale table, or the factory table if
/// the user has none.
pub fn available_scales() -> Result<Vec<String>, ConfigError> {
    let settings = Settings::load_or_default(config_file_path())?;
    Ok(settings.scale_table(None)?.names())
}
