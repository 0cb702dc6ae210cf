use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::sdk_layout::{DEFAULT_COMPONENTS_FILE, DEFAULT_SOLUTION};

/// File name looked up in the working directory when no `--config` is given.
pub const SETTINGS_FILE: &str = "psdk-wizard.toml";

/// Optional wizard settings (`psdk-wizard.toml`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardSettings {
    /// Component descriptor document, relative to the wizard directory.
    pub components_file: Option<PathBuf>,
    /// Solution generated inside the SDK root.
    pub solution: Option<String>,
    pub build: BuildSettings,
    pub detect: DetectSettings,
    pub environment: EnvironmentSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
    /// Explicit MSBuild executable; skips vswhere.
    pub msbuild: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectSettings {
    /// Extra directories scanned for shortcuts.
    pub shortcut_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentSettings {
    pub user_file: Option<PathBuf>,
    pub machine_file: Option<PathBuf>,
}

impl WizardSettings {
    pub fn components_path(&self, wizard_dir: &Path) -> PathBuf {
        let file = self.components_file.as_deref().unwrap_or(Path::new(DEFAULT_COMPONENTS_FILE));
        wizard_dir.join(file)
    }

    pub fn solution_name(&self) -> &str {
        self.solution.as_deref().unwrap_or(DEFAULT_SOLUTION)
    }
}
