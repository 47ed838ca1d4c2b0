//! File-level tests for settings and scale tables.

use audiocipher_config::{ConfigError, ScaleTable, Settings};
use audiocipher_core::Note;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_settings_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let settings = Settings {
        default_scheme: "beeps".to_string(),
        default_scale: "A Minor".to_string(),
        scales_file: None,
        assets_dir: Some(PathBuf::from("tones")),
    };
    settings.save(&path).unwrap();
    assert!(path.exists());
    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn test_missing_settings_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_missing_settings_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Settings::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_scale_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scales.txt");
    let table = ScaleTable::factory();
    table.save(&path).unwrap();
    assert_eq!(ScaleTable::load(&path).unwrap(), table);
}

#[test]
fn test_settings_scales_file_takes_precedence() {
    let dir = TempDir::new().unwrap();
    let listed = dir.path().join("listed.txt");
    let explicit = dir.path().join("explicit.txt");
    std::fs::write(&listed, "Listed: 1, 2, 3, 4, 5, 6, 7, 8\n").unwrap();
    std::fs::write(&explicit, "Explicit: 8, 7, 6, 5, 4, 3, 2, 1\n").unwrap();

    let settings = Settings {
        scales_file: Some(listed),
        ..Settings::default()
    };
    assert_eq!(settings.scale_table(None).unwrap().names(), vec!["Listed"]);

    let table = settings.scale_table(Some(&explicit)).unwrap();
    assert_eq!(table.names(), vec!["Explicit"]);
    assert_eq!(table.get("explicit").unwrap().frequency(Note::C), 8.0);
}

#[test]
fn test_malformed_scale_file_returns_no_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(
        &path,
        "Fine: 1, 2, 3, 4, 5, 6, 7, 8\n\nBroken: 1, 2, 3, 4, 5, 6, 7\n",
    )
    .unwrap();
    let err = ScaleTable::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedScale { line: 3, .. }), "{err}");
}
