//! Export of generated gears and loading of option files.

#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "cli")]
use crate::config::GearConfig;
#[cfg(feature = "cli")]
use std::path::Path;

/// Generic I/O and format-conversion errors.
///
/// Some variants are behind cargo feature-flags and are not constructed
/// when the feature is disabled.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Input is malformed: {0}")]
    MalformedInput(String),

    #[error("Invalid gear: {0}")]
    Gear(#[from] crate::errors::GearError),

    #[cfg(feature = "cli")]
    /// Error bubbled up from `serde_json` while reading or writing options.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a [`GearConfig`] from a JSON file. Missing keys take their defaults.
#[cfg(feature = "cli")]
pub fn load_config(path: &Path) -> Result<GearConfig, IoError> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

#[cfg(feature = "cli")]
pub fn parse_config(text: &str) -> Result<GearConfig, IoError> {
    if text.trim().is_empty() {
        return Err(IoError::MalformedInput("empty option file".to_string()));
    }
    Ok(serde_json::from_str(text)?)
}
