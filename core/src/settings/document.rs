use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QuickSuggestions {
    pub strings: bool,
}

/// Editor settings written into `.vscode/settings.json`.
///
/// Fields serialize in declaration order, so the on-disk key order is fixed.
/// Each key is a single field, which rules out duplicate entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument {
    #[serde(rename = "css.lint.unknownAtRules")]
    css_lint_unknown_at_rules: String,
    #[serde(rename = "editor.quickSuggestions")]
    editor_quick_suggestions: QuickSuggestions,
    #[serde(rename = "tailwindCSS.emmetCompletions")]
    tailwind_emmet_completions: bool,
    #[serde(rename = "files.associations")]
    files_associations: BTreeMap<String, String>,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        SettingsDocument {
            css_lint_unknown_at_rules: "ignore".to_string(),
            editor_quick_suggestions: QuickSuggestions { strings: true },
            tailwind_emmet_completions: true,
            files_associations: BTreeMap::from([("*.html".to_string(), "html".to_string())]),
        }
    }
}

impl SettingsDocument {
    pub fn css_lint_unknown_at_rules(&self) -> &str {
        &self.css_lint_unknown_at_rules
    }

    pub fn editor_quick_suggestions(&self) -> QuickSuggestions {
        self.editor_quick_suggestions
    }

    pub fn tailwind_emmet_completions(&self) -> bool {
        self.tailwind_emmet_completions
    }

    pub fn files_associations(&self) -> &BTreeMap<String, String> {
        &self.files_associations
    }

    /// Four-space indented JSON with no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)
            .context("Failed to serialize settings to JSON")?;

        String::from_utf8(buf).context("Serialized settings are not valid UTF-8")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse settings JSON")
    }
}
