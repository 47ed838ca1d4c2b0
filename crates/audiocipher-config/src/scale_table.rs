//! Musical scale tables.
//!
//! # File Format
//!
//! One scale per line, eight comma-separated frequencies assigned to
//! C, D, E, F, G, A, B, C5 in order:
//!
//! ```text
//! # name: C, D, E, F, G, A, B, C5
//! C Major: 261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Any malformed line
//! fails the whole load.

use crate::ConfigError;
use audiocipher_core::{NOTE_NAMES, Scale};
use std::fmt::Write as _;
use std::path::Path;
use tracing::warn;

/// Scales available without a scale file.
pub const FACTORY_SCALES: [(&str, [f64; 8]); 6] = [
    (
        "C Major",
        [261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25],
    ),
    (
        "G Major",
        [196.00, 220.00, 246.94, 261.63, 293.66, 329.63, 369.99, 392.00],
    ),
    (
        "D Major",
        [293.66, 329.63, 369.99, 392.00, 440.00, 493.88, 554.37, 587.33],
    ),
    (
        "A Minor",
        [220.00, 246.94, 261.63, 293.66, 329.63, 349.23, 392.00, 440.00],
    ),
    (
        "E Minor",
        [329.63, 369.99, 392.00, 440.00, 493.88, 523.25, 587.33, 659.25],
    ),
    (
        "C Harmonic Minor",
        [261.63, 293.66, 311.13, 349.23, 392.00, 415.30, 493.88, 523.25],
    ),
];

/// Named collection of scales, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaleTable {
    scales: Vec<Scale>,
}

impl ScaleTable {
    /// The built-in table.
    pub fn factory() -> Self {
        Self {
            scales: FACTORY_SCALES
                .iter()
                .map(|&(name, freqs)| Scale::new(name, freqs))
                .collect(),
        }
    }

    /// Parse a scale table from text.
    ///
    /// A name appearing twice keeps its first position and takes the later
    /// frequencies.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut table = Self::default();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            table.insert(parse_line(i + 1, line)?);
        }
        Ok(table)
    }

    /// Load a scale table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::parse(&text)
    }

    /// Write the table in the text format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }
        std::fs::write(path, self.to_text()).map_err(|e| ConfigError::write_file(path, e))
    }

    /// Render the table in the text format.
    pub fn to_text(&self) -> String {
        let mut out = format!("# name: {}\n", NOTE_NAMES.join(", "));
        for scale in &self.scales {
            let freqs: Vec<String> = scale.frequencies().iter().map(|f| format!("{f}")).collect();
            let _ = writeln!(out, "{}: {}", scale.name(), freqs.join(", "));
        }
        out
    }

    /// Add a scale, replacing any existing scale of the same name.
    pub fn insert(&mut self, scale: Scale) {
        match self.position(scale.name()) {
            Some(i) => {
                warn!(name = scale.name(), "duplicate scale name; later definition wins");
                self.scales[i] = scale;
            }
            None => self.scales.push(scale),
        }
    }

    /// Look a scale up by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&Scale, ConfigError> {
        self.position(name)
            .map(|i| &self.scales[i])
            .ok_or_else(|| ConfigError::UnknownScale(name.to_string()))
    }

    /// Scale names in table order.
    pub fn names(&self) -> Vec<String> {
        self.scales.iter().map(|s| s.name().to_string()).collect()
    }

    /// Iterate over scales in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Scale> {
        self.scales.iter()
    }

    /// Number of scales.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.scales
            .iter()
            .position(|s| s.name().eq_ignore_ascii_case(name))
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<Scale, ConfigError> {
    let (name, values) = line
        .split_once(':')
        .ok_or_else(|| ConfigError::malformed(line_no, "missing ':' after scale name"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::malformed(line_no, "empty scale name"));
    }

    let fields: Vec<&str> = values.split(',').map(str::trim).collect();
    if fields.len() != NOTE_NAMES.len() {
        return Err(ConfigError::malformed(
            line_no,
            format!(
                "expected {} frequencies, found {}",
                NOTE_NAMES.len(),
                fields.len()
            ),
        ));
    }

    let mut freqs = [0.0; 8];
    for (slot, field) in freqs.iter_mut().zip(&fields) {
        let f: f64 = field.parse().map_err(|_| {
            ConfigError::malformed(line_no, format!("'{field}' is not a number"))
        })?;
        if !f.is_finite() || f <= 0.0 {
            return Err(ConfigError::malformed(
                line_no,
                format!("frequency must be positive, got {field}"),
            ));
        }
        *slot = f;
    }
    Ok(Scale::new(name, freqs))
}
