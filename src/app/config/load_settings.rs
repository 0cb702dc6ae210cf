//! Wizard settings loading.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::settings::{SETTINGS_FILE, WizardSettings};
use crate::domain::AppError;

/// Load settings from `explicit`, else from `psdk-wizard.toml` in `wizard_dir`, else defaults.
///
/// An explicitly named file must exist; the implicit one is optional.
pub fn load_settings(explicit: Option<&Path>, wizard_dir: &Path) -> Result<WizardSettings, AppError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (wizard_dir.join(SETTINGS_FILE), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if required {
                return Err(AppError::ConfigNotFound(path));
            }
            debug!(file = %path.display(), "no settings file, using defaults");
            return Ok(WizardSettings::default());
        }
        Err(err) => return Err(err.into()),
    };

    let settings = parse_settings(&content)
        .map_err(|e| AppError::config_error(format!("Invalid settings in '{}': {e}", path.display())))?;
    debug!(file = %path.display(), "settings loaded");
    Ok(settings)
}

pub fn parse_settings(content: &str) -> Result<WizardSettings, toml::de::Error> {
    toml::from_str(content)
}
