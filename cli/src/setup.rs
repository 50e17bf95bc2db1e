use anyhow::Result;
use console::style;
use edsetup_core::config::get_settings_path;
use edsetup_core::settings::{self, SettingsDocument, SettingsStatus, WriteReport};
use std::io::Write;
use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "✅ VS Code settings have been configured successfully!";
pub const RESTART_HINT: &str = "Please restart VS Code for the changes to take effect.";

pub fn run_setup(
    base_dir: &Path,
    document: &SettingsDocument,
    out: &mut impl Write,
) -> Result<WriteReport> {
    let report = settings::write_settings(base_dir, document)?;

    writeln!(out, "{}", SUCCESS_MESSAGE)?;
    writeln!(out, "{}", RESTART_HINT)?;

    Ok(report)
}

pub fn run_show(document: &SettingsDocument, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", document.to_pretty_json()?)?;
    Ok(())
}

pub fn run_check(
    base_dir: &Path,
    document: &SettingsDocument,
    out: &mut impl Write,
) -> Result<SettingsStatus> {
    let settings_path = get_settings_path(base_dir);
    let status = settings::check_settings(base_dir, document)?;

    match status {
        SettingsStatus::UpToDate => writeln!(
            out,
            "{} Settings are up to date: {}",
            style("✓").green().bold(),
            style(settings_path.display()).cyan()
        )?,
        SettingsStatus::Missing => writeln!(
            out,
            "{} No settings found at {}",
            style("!").yellow(),
            style(settings_path.display()).cyan()
        )?,
        SettingsStatus::Differs => writeln!(
            out,
            "{} Settings differ from the expected document: {}",
            style("✗").red().bold(),
            style(settings_path.display()).cyan()
        )?,
    }

    Ok(status)
}
