use std::path::Path;

use serde::Deserialize;

use crate::error::GenerateError;

pub const DEFAULT_GUARD: &str = "_SETTINGS_CONFIG_H";
pub const DEFAULT_GROUP_MACRO: &str = "SETTING_GROUPS";
pub const DEFAULT_ENTRY_MACRO: &str = "DEF_SETTING_GROUP";

/// Preprocessor symbols used in the generated header.
///
/// The defaults match what the native build includes; a layout file only
/// needs the fields it changes:
/// ```JSON
/// { "guard": "_LOGGER_SETTINGS_H", "group_macro": "LOGGER_SETTINGS" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderLayout {
    pub guard: String,
    pub group_macro: String,
    pub entry_macro: String,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            guard: DEFAULT_GUARD.to_string(),
            group_macro: DEFAULT_GROUP_MACRO.to_string(),
            entry_macro: DEFAULT_ENTRY_MACRO.to_string(),
        }
    }
}

impl HeaderLayout {
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let text = std::fs::read_to_string(path).map_err(|source| GenerateError::LayoutRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| GenerateError::LayoutParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies explicit overrides on top of this layout.
    pub fn with_overrides(
        mut self,
        guard: Option<String>,
        group_macro: Option<String>,
        entry_macro: Option<String>,
    ) -> Self {
        if let Some(guard) = guard {
            self.guard = guard;
        }
        if let Some(group_macro) = group_macro {
            self.group_macro = group_macro;
        }
        if let Some(entry_macro) = entry_macro {
            self.entry_macro = entry_macro;
        }
        self
    }
}
