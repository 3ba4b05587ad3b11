//! Attribute map and typed attribute parsing
//!
//! Attributes are the sole configuration surface of a widget. Values are
//! free-form strings; the `features` attribute additionally carries a JSON
//! array of strings. Presence attributes (`popular`, `loading`) are true
//! when set to any value, including the empty string.

use thiserror::Error;

/// Errors raised while applying attribute changes
#[derive(Error, Debug)]
pub enum AttrError {
    #[error("invalid features JSON: {0}")]
    InvalidFeatures(#[from] serde_json::Error),

    #[error("unrecognized attribute: {0}")]
    UnrecognizedAttribute(String),
}

/// Raw attribute store of a single widget, in insertion order.
///
/// Mirrors the host element's attribute list: widgets keep it in sync with
/// their typed configuration so the raw surface can be read back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`, if the attribute is set
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Presence-attribute semantics: set at all means true
    pub fn is_present(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Set `name` to `value`, returning the previous value if any
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        for (key, existing) in &mut self.entries {
            if key == name {
                return Some(std::mem::replace(existing, value.to_string()));
            }
        }
        self.entries.push((name.to_string(), value.to_string()));
        None
    }

    /// Remove `name`, returning its value if it was set
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the `features` attribute: a JSON array of strings.
pub fn parse_features(raw: &str) -> Result<Vec<String>, AttrError> {
    let features: Vec<String> = serde_json::from_str(raw)?;
    Ok(features)
}

/// Parse a boolean attribute with string values.
///
/// Matches the source semantics: every value except the literal `"false"`
/// is true, including the empty string.
pub fn parse_bool(raw: &str) -> bool {
    raw != "false"
}

/// Treat empty values as absent, falling back to `default`.
pub fn non_empty_or(raw: &str, default: &str) -> String {
    if raw.is_empty() {
        default.to_string()
    } else {
        raw.to_string()
    }
}
