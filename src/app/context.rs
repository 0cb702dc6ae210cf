use std::path::{Path, PathBuf};

use crate::app::config::WizardSettings;
use crate::app::services::environment::EnvironmentVariableStore;
use crate::domain::{AppError, ComponentDescriptor, PLUGIN_SDK_DIR, SdkLayout};
use crate::ports::{EnvScopeStore, ShortcutSource, ToolRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: EnvScopeStore, T: ToolRunner, S: ShortcutSource> {
    env: E,
    tools: T,
    shortcuts: S,
    settings: WizardSettings,
    wizard_dir: PathBuf,
    components: Vec<ComponentDescriptor>,
}

impl<E: EnvScopeStore, T: ToolRunner, S: ShortcutSource> AppContext<E, T, S> {
    pub fn new(
        env: E,
        tools: T,
        shortcuts: S,
        settings: WizardSettings,
        wizard_dir: impl Into<PathBuf>,
        components: Vec<ComponentDescriptor>,
    ) -> Self {
        Self { env, tools, shortcuts, settings, wizard_dir: wizard_dir.into(), components }
    }

    pub fn env_store(&self) -> &E {
        &self.env
    }

    /// Precedence view over the host store.
    pub fn environment(&self) -> EnvironmentVariableStore<'_, E> {
        EnvironmentVariableStore::new(&self.env)
    }

    pub fn tools(&self) -> &T {
        &self.tools
    }

    pub fn shortcuts(&self) -> &S {
        &self.shortcuts
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    /// Directory the wizard runs from; expected to be the SDK root.
    pub fn wizard_dir(&self) -> &Path {
        &self.wizard_dir
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    /// Current value of the variable bound to `component`, if any.
    pub fn value_of(&self, component: &ComponentDescriptor) -> Result<Option<String>, AppError> {
        match component.env_var() {
            Some(name) => self.environment().read(name),
            None => Ok(None),
        }
    }

    /// SDK layout rooted at the current `PLUGIN_SDK_DIR`.
    pub fn sdk_layout(&self) -> Result<SdkLayout, AppError> {
        self.environment()
            .read(PLUGIN_SDK_DIR)?
            .filter(|dir| !dir.trim().is_empty())
            .map(SdkLayout::new)
            .ok_or(AppError::SdkDirNotSet)
    }
}
