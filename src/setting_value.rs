use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use crate::error::GenerateError;

/// Flat settings document, keys in the order they appear in the source text.
///
/// ```JSON
/// { "Logger_socketPort": 14261, "Logger_supportFileLogging": true, "GUI_Theme": "dark" }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument(Map<String, Value>);

impl ConfigDocument {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One entry per key, in document order.
    pub fn entries(&self) -> impl Iterator<Item = SettingEntry> + '_ {
        self.0.iter().map(|(name, value)| classify(name, value))
    }
}

/// Value kinds a setting can take in the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingKind {
    /// Decimal text of the integer, emitted as-is (no range check).
    UInt32(String),
    Bool(bool),
    String(String),
    Unsupported,
}

impl SettingKind {
    /// C++ type tag and default-value literal, or `None` for unsupported values.
    pub fn fields(&self) -> Option<(&'static str, String)> {
        match self {
            SettingKind::UInt32(digits) => Some(("uint32_t", digits.clone())),
            SettingKind::Bool(flag) => Some(("bool", flag.to_string())),
            // inserted verbatim, quotes and backslashes are not escaped
            SettingKind::String(text) => Some(("std::string", format!("\"{text}\""))),
            SettingKind::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEntry {
    pub name: String,
    pub kind: SettingKind,
}

impl SettingEntry {
    /// Renders `   ENTRY(name, type, value) \`.
    ///
    /// Unsupported values keep the name and leave the type/value slot empty,
    /// e.g. `   DEF_SETTING_GROUP(ratio, ) \`.
    pub fn render_line(&self, entry_macro: &str) -> String {
        match self.kind.fields() {
            Some((type_tag, literal)) => {
                format!("   {entry_macro}({}, {type_tag}, {literal}) \\", self.name)
            }
            None => format!("   {entry_macro}({}, ) \\", self.name),
        }
    }
}

/// Maps a JSON value to its setting kind.
///
/// Booleans are matched before numbers so `true`/`false` can never come out
/// as `uint32_t`.
pub fn classify(name: &str, value: &Value) -> SettingEntry {
    let kind = match value {
        Value::Bool(flag) => Some(SettingKind::Bool(*flag)),
        Value::Number(n) => integer_text(n).map(SettingKind::UInt32),
        Value::String(text) => Some(SettingKind::String(text.clone())),
        _ => None,
    }
    .unwrap_or_else(|| {
        warn!(
            setting = name,
            found = json_kind(value),
            "unsupported setting value type, emitting entry without type and value"
        );
        SettingKind::Unsupported
    });

    debug!(setting = name, kind = ?kind, "classified setting");

    SettingEntry {
        name: name.to_string(),
        kind,
    }
}

/// Parses the settings document, which must be a JSON object.
pub fn parse_document(json: &str) -> Result<ConfigDocument, GenerateError> {
    let value: Value = serde_json::from_str(json).map_err(GenerateError::InputParse)?;

    match value {
        Value::Object(map) => Ok(ConfigDocument(map)),
        other => Err(GenerateError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

/// Decimal text of an integral number of any magnitude, `None` for numbers
/// written with a fraction or exponent. Negative zero prints as `0`.
fn integer_text(n: &Number) -> Option<String> {
    let text = n.to_string();
    if text.contains(['.', 'e', 'E']) {
        return None;
    }
    match text.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0') => Some("0".to_string()),
        _ => Some(text),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if integer_text(n).is_some() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
