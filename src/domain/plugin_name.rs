use std::fmt;

use super::AppError;

/// A validated name for a new plugin project.
///
/// Guarantees:
/// - Non-empty after trimming
/// - No whitespace
/// - No character Windows forbids in file names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginName(String);

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

impl PluginName {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let name = raw.trim();
        let invalid = |reason: &str| AppError::InvalidPluginName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("No name specified"));
        }

        if name.chars().any(|ch| ch.is_whitespace() || ch.is_control() || FORBIDDEN.contains(&ch)) {
            return Err(invalid("Name contains forbidden character(s)"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
