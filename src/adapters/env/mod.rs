//! Host environment stores behind [`EnvScopeStore`].

mod file_store;
mod process;
#[cfg(windows)]
mod registry_store;

use std::path::PathBuf;

use tracing::debug;

pub use file_store::{DEFAULT_MACHINE_FILE, FileEnvStore};
#[cfg(windows)]
pub use registry_store::RegistryEnvStore;

use crate::app::config::EnvironmentSettings;
use crate::domain::{AppError, EnvScope};
use crate::ports::EnvScopeStore;

/// Overrides the user-scope file of [`FileEnvStore`].
pub const USER_ENV_OVERRIDE: &str = "PSDK_WIZARD_USER_ENV";
/// Overrides the machine-scope file of [`FileEnvStore`].
pub const MACHINE_ENV_OVERRIDE: &str = "PSDK_WIZARD_MACHINE_ENV";

/// The store the CLI talks to.
#[derive(Debug, Clone)]
pub enum HostEnvStore {
    #[cfg(windows)]
    Registry(RegistryEnvStore),
    Files(FileEnvStore),
}

impl HostEnvStore {
    /// Registry on Windows unless environment files are configured; files elsewhere.
    pub fn from_settings(settings: &EnvironmentSettings) -> Result<Self, AppError> {
        let user = std::env::var_os(USER_ENV_OVERRIDE).map(PathBuf::from).or_else(|| settings.user_file.clone());
        let machine =
            std::env::var_os(MACHINE_ENV_OVERRIDE).map(PathBuf::from).or_else(|| settings.machine_file.clone());

        if user.is_none() && machine.is_none() {
            if let Some(store) = Self::native() {
                return Ok(store);
            }
        }

        let (user, machine) = match (user, machine) {
            (Some(user), Some(machine)) => (user, machine),
            (user, machine) => {
                let (default_user, default_machine) = FileEnvStore::default_paths()?;
                (user.unwrap_or(default_user), machine.unwrap_or(default_machine))
            }
        };
        debug!(user = %user.display(), machine = %machine.display(), "using file environment store");
        Ok(HostEnvStore::Files(FileEnvStore::new(user, machine)))
    }

    #[cfg(windows)]
    fn native() -> Option<Self> {
        debug!("using registry environment store");
        Some(HostEnvStore::Registry(RegistryEnvStore::new()))
    }

    #[cfg(not(windows))]
    fn native() -> Option<Self> {
        None
    }

    fn inner(&self) -> &dyn EnvScopeStore {
        match self {
            #[cfg(windows)]
            HostEnvStore::Registry(store) => store,
            HostEnvStore::Files(store) => store,
        }
    }
}

impl EnvScopeStore for HostEnvStore {
    fn get(&self, scope: EnvScope, name: &str) -> Result<Option<String>, AppError> {
        self.inner().get(scope, name)
    }

    fn set(&self, scope: EnvScope, name: &str, value: &str) -> Result<(), AppError> {
        self.inner().set(scope, name, value)
    }

    fn remove(&self, scope: EnvScope, name: &str) -> Result<(), AppError> {
        self.inner().remove(scope, name)
    }
}

#[cfg(test)]
#[allow(irrefutable_let_patterns)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn configured_files_select_file_store() {
        let settings = EnvironmentSettings {
            user_file: Some(PathBuf::from("/tmp/psdk-user.toml")),
            machine_file: Some(PathBuf::from("/tmp/psdk-machine.toml")),
        };
        // SAFETY: serialized with every other test touching the process environment.
        unsafe {
            std::env::remove_var(USER_ENV_OVERRIDE);
            std::env::remove_var(MACHINE_ENV_OVERRIDE);
        }

        let HostEnvStore::Files(store) = HostEnvStore::from_settings(&settings).unwrap() else {
            panic!("expected file store");
        };
        assert_eq!(store.user_file(), PathBuf::from("/tmp/psdk-user.toml"));
        assert_eq!(store.machine_file(), PathBuf::from("/tmp/psdk-machine.toml"));
    }

    #[test]
    #[serial]
    fn environment_overrides_win_over_settings() {
        let settings = EnvironmentSettings {
            user_file: Some(PathBuf::from("/tmp/from-settings.toml")),
            machine_file: Some(PathBuf::from("/tmp/psdk-machine.toml")),
        };
        // SAFETY: serialized with every other test touching the process environment.
        unsafe { std::env::set_var(USER_ENV_OVERRIDE, "/tmp/from-env.toml") };

        let store = HostEnvStore::from_settings(&settings);

        // SAFETY: as above.
        unsafe { std::env::remove_var(USER_ENV_OVERRIDE) };
        let HostEnvStore::Files(store) = store.unwrap() else {
            panic!("expected file store");
        };
        assert_eq!(store.user_file(), PathBuf::from("/tmp/from-env.toml"));
    }
}
