use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::SettingsDocument;
use crate::config::{get_settings_dir, get_settings_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub created_dir: bool,
    pub bytes_written: usize,
}

/// Writes `.vscode/settings.json` under `base_dir`, replacing any existing file.
///
/// The settings directory is created without its parents: a missing
/// `base_dir` is an error and nothing is written.
pub fn write_settings(base_dir: &Path, document: &SettingsDocument) -> Result<WriteReport> {
    let settings_dir = get_settings_dir(base_dir);
    let settings_path = get_settings_path(base_dir);

    let created_dir = ensure_settings_dir(&settings_dir)?;

    let content = document.to_pretty_json()?;
    std::fs::write(&settings_path, &content)
        .with_context(|| format!("Failed to write settings to {}", settings_path.display()))?;

    tracing::info!(
        path = %settings_path.display(),
        bytes = content.len(),
        created_dir,
        "Settings written"
    );

    Ok(WriteReport {
        path: settings_path,
        created_dir,
        bytes_written: content.len(),
    })
}

fn ensure_settings_dir(settings_dir: &Path) -> Result<bool> {
    if settings_dir.exists() {
        tracing::debug!("Settings directory already exists: {}", settings_dir.display());
        return Ok(false);
    }

    std::fs::create_dir(settings_dir).with_context(|| {
        format!(
            "Failed to create settings directory at {}",
            settings_dir.display()
        )
    })?;
    tracing::debug!("Created settings directory: {}", settings_dir.display());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_dir_and_writes_document() {
        let tmp = TempDir::new().unwrap();
        let doc = SettingsDocument::default();

        let report = write_settings(tmp.path(), &doc).unwrap();
        assert!(report.created_dir);
        assert_eq!(report.path, tmp.path().join(".vscode").join("settings.json"));

        let content = fs::read_to_string(&report.path).unwrap();
        assert_eq!(report.bytes_written, content.len());
        assert_eq!(SettingsDocument::from_json(&content).unwrap(), doc);

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn second_run_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let doc = SettingsDocument::default();

        let first = write_settings(tmp.path(), &doc).unwrap();
        let first_bytes = fs::read(&first.path).unwrap();

        let second = write_settings(tmp.path(), &doc).unwrap();
        assert!(!second.created_dir);
        assert_eq!(fs::read(&second.path).unwrap(), first_bytes);
    }

    #[test]
    fn existing_dir_keeps_other_files() {
        let tmp = TempDir::new().unwrap();
        let settings_dir = tmp.path().join(".vscode");
        fs::create_dir(&settings_dir).unwrap();
        fs::write(settings_dir.join("launch.json"), "{ \"version\": \"0.2.0\" }").unwrap();

        let report = write_settings(tmp.path(), &SettingsDocument::default()).unwrap();
        assert!(!report.created_dir);
        assert_eq!(
            fs::read_to_string(settings_dir.join("launch.json")).unwrap(),
            "{ \"version\": \"0.2.0\" }"
        );
    }

    #[test]
    fn overwrites_manual_edits() {
        let tmp = TempDir::new().unwrap();
        let settings_dir = tmp.path().join(".vscode");
        fs::create_dir(&settings_dir).unwrap();
        fs::write(settings_dir.join("settings.json"), "{ \"editor.tabSize\": 2 }").unwrap();

        let doc = SettingsDocument::default();
        let report = write_settings(tmp.path(), &doc).unwrap();

        let content = fs::read_to_string(&report.path).unwrap();
        assert_eq!(content, doc.to_pretty_json().unwrap());
    }

    #[test]
    fn missing_parent_fails_without_writing() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("missing");

        let err = write_settings(&base, &SettingsDocument::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to create settings directory"));
        assert!(!base.exists());
        assert!(!get_settings_path(&base).exists());
    }
}
