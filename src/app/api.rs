//! API Facade for the application.
//!
//! Each function builds a host-backed `AppContext` from the working directory and
//! runs one command against it.

use std::path::{Path, PathBuf};

use tracing::error;

use crate::adapters::{CommandToolRunner, HostEnvStore, ShortcutDirectories};
use crate::app::AppContext;
use crate::app::commands::{build, components, detect, env, generate, new_plugin, status};
use crate::app::config::{load_components, load_settings, require_components};
use crate::domain::{AppError, WriteOutcome, shortcut};

pub use crate::app::commands::build::{BuildReport, BuildRequest, BuildStep};
pub use crate::app::commands::components::ComponentsFormat;
pub use crate::app::commands::detect::Proposal;
pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::app::commands::new_plugin::{NewPluginOutcome, NewPluginRequest};
pub use crate::app::commands::status::{Stage, StatusReport};

/// Context wired to the real host: environment store, child processes, shortcut folders.
pub type HostContext = AppContext<HostEnvStore, CommandToolRunner, ShortcutDirectories>;

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit settings file.
    pub config: Option<PathBuf>,
}

/// Build the host context for the current directory.
///
/// A descriptor file that cannot be loaded is reported and treated as empty;
/// an empty descriptor list stops the wizard.
pub fn open(options: &GlobalOptions) -> Result<HostContext, AppError> {
    open_at(options, std::env::current_dir()?)
}

pub fn open_at(options: &GlobalOptions, wizard_dir: impl Into<PathBuf>) -> Result<HostContext, AppError> {
    let wizard_dir = wizard_dir.into();
    let settings = load_settings(options.config.as_deref(), &wizard_dir)?;

    let components_path = settings.components_path(&wizard_dir);
    let components = load_components(&components_path).unwrap_or_else(|err| {
        error!("{err}");
        Vec::new()
    });
    let components = require_components(&components_path, components)?;

    let env = HostEnvStore::from_settings(&settings.environment)?;
    let shortcuts = ShortcutDirectories::for_host(&settings.detect.shortcut_dirs);
    Ok(AppContext::new(env, CommandToolRunner::new(), shortcuts, settings, wizard_dir, components))
}

pub fn status(options: &GlobalOptions) -> Result<StatusReport, AppError> {
    status::execute(&open(options)?)
}

pub fn components(options: &GlobalOptions, format: ComponentsFormat) -> Result<String, AppError> {
    components::execute(open(options)?.components(), format)
}

pub fn env_get(options: &GlobalOptions, name: &str) -> Result<Option<String>, AppError> {
    env::get(&open(options)?, name)
}

pub fn env_set(options: &GlobalOptions, name: &str, value: &str) -> Result<WriteOutcome, AppError> {
    env::set(&open(options)?, name, value)
}

pub fn env_unset(options: &GlobalOptions, name: &str) -> Result<WriteOutcome, AppError> {
    env::unset(&open(options)?, name)
}

/// Target of a shortcut file; empty when it cannot be resolved.
pub fn shortcut_target(path: &Path) -> String {
    shortcut::resolve(path)
}

/// Detection proposals, written to the environment when `apply` is set.
pub fn detect(options: &GlobalOptions, apply: bool) -> Result<Vec<Proposal>, AppError> {
    let ctx = open(options)?;
    let proposals = detect::propose(&ctx)?;
    if apply {
        detect::apply(&ctx, &proposals)?;
    }
    Ok(proposals)
}

pub fn generate(options: &GlobalOptions) -> Result<GenerateOutcome, AppError> {
    generate::execute(&open(options)?)
}

pub fn build(options: &GlobalOptions, request: &BuildRequest) -> Result<BuildReport, AppError> {
    build::execute(&open(options)?, request)
}

pub fn new_plugin(options: &GlobalOptions, request: &NewPluginRequest) -> Result<NewPluginOutcome, AppError> {
    new_plugin::execute(&open(options)?, request)
}
