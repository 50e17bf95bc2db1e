pub mod document;
pub mod writer;

pub use document::{QuickSuggestions, SettingsDocument};
pub use writer::{WriteReport, write_settings};

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::get_settings_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsStatus {
    Missing,
    UpToDate,
    Differs,
}

pub fn load_settings(base_dir: &Path) -> Result<SettingsDocument> {
    let settings_path = get_settings_path(base_dir);

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read settings from {}", settings_path.display()))?;

    SettingsDocument::from_json(&content)
        .with_context(|| format!("Invalid settings in {}", settings_path.display()))
}

/// Compares the settings file under `base_dir` with `expected`.
/// An unreadable or unparsable file is an error, not `Differs`.
pub fn check_settings(base_dir: &Path, expected: &SettingsDocument) -> Result<SettingsStatus> {
    if !get_settings_path(base_dir).exists() {
        return Ok(SettingsStatus::Missing);
    }

    let current = load_settings(base_dir)?;
    if &current == expected {
        Ok(SettingsStatus::UpToDate)
    } else {
        Ok(SettingsStatus::Differs)
    }
}
