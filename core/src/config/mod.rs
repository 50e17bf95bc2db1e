use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const SETTINGS_DIR: &str = ".vscode";
pub const SETTINGS_FILE: &str = "settings.json";

/// Directory holding the running executable. The settings directory is
/// resolved against this, never against the current working directory.
pub fn get_program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("Executable path has no parent: {}", exe.display()))
}

pub fn get_settings_dir(base_dir: &Path) -> PathBuf {
    base_dir.join(SETTINGS_DIR)
}

pub fn get_settings_path(base_dir: &Path) -> PathBuf {
    get_settings_dir(base_dir).join(SETTINGS_FILE)
}

pub fn settings_exist(base_dir: &Path) -> bool {
    get_settings_path(base_dir).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_path_layout() {
        let base = Path::new("/opt/tool");
        assert_eq!(get_settings_dir(base), PathBuf::from("/opt/tool/.vscode"));
        assert_eq!(
            get_settings_path(base),
            PathBuf::from("/opt/tool/.vscode/settings.json")
        );
    }

    #[test]
    fn program_dir_contains_executable() {
        let dir = get_program_dir().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(exe.parent().unwrap(), dir);
    }

    #[test]
    fn settings_exist_tracks_file() {
        let tmp = TempDir::new().unwrap();
        assert!(!settings_exist(tmp.path()));

        std::fs::create_dir(get_settings_dir(tmp.path())).unwrap();
        assert!(!settings_exist(tmp.path()));

        std::fs::write(get_settings_path(tmp.path()), "{}").unwrap();
        assert!(settings_exist(tmp.path()));
    }
}
