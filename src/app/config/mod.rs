//! Settings and component descriptor loading.

mod load_components;
mod load_settings;
mod settings;

pub use load_components::{load_components, require_components};
pub use load_settings::{load_settings, parse_settings};
pub use settings::{
    BuildSettings, DetectSettings, EnvironmentSettings, SETTINGS_FILE, WizardSettings,
};
