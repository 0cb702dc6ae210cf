//! User and machine scopes kept as TOML tables on disk.
//!
//! Each file is a flat `NAME = "value"` table. A missing file is an empty scope.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::process;
use crate::domain::{AppError, EnvScope};
use crate::ports::EnvScopeStore;

pub const DEFAULT_MACHINE_FILE: &str = "/etc/psdk-wizard/environment.toml";

#[derive(Debug, Clone)]
pub struct FileEnvStore {
    user_file: PathBuf,
    machine_file: PathBuf,
}

impl FileEnvStore {
    pub fn new(user_file: impl Into<PathBuf>, machine_file: impl Into<PathBuf>) -> Self {
        Self { user_file: user_file.into(), machine_file: machine_file.into() }
    }

    /// Per-user config directory for the user scope, [`DEFAULT_MACHINE_FILE`] for the machine scope.
    pub fn default_paths() -> Result<(PathBuf, PathBuf), AppError> {
        let dirs = directories::ProjectDirs::from("", "", "psdk-wizard").ok_or_else(|| {
            AppError::config_error("Cannot determine the user configuration directory")
        })?;
        Ok((dirs.config_dir().join("environment.toml"), PathBuf::from(DEFAULT_MACHINE_FILE)))
    }

    pub fn user_file(&self) -> &Path {
        &self.user_file
    }

    pub fn machine_file(&self) -> &Path {
        &self.machine_file
    }

    fn file_for(&self, scope: EnvScope) -> &Path {
        match scope {
            EnvScope::User => &self.user_file,
            EnvScope::Machine | EnvScope::Process => &self.machine_file,
        }
    }

    fn load(&self, path: &Path) -> Result<BTreeMap<String, String>, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn update<F>(&self, scope: EnvScope, name: &str, change: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let path = self.file_for(scope);
        let mut table = self.load(path)?;
        if !change(&mut table) {
            return Ok(());
        }

        let content = toml::to_string(&table)
            .map_err(|e| AppError::config_error(format!("Cannot serialize {}: {e}", path.display())))?;

        let written = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|_| fs::write(path, content));

        match written {
            Ok(()) => {
                debug!(file = %path.display(), variable = name, "environment file updated");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied && scope == EnvScope::Machine => {
                Err(AppError::Privilege { variable: name.to_string() })
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl EnvScopeStore for FileEnvStore {
    fn get(&self, scope: EnvScope, name: &str) -> Result<Option<String>, AppError> {
        process::check_name(name)?;
        match scope {
            EnvScope::Process => process::get(name),
            _ => Ok(self.load(self.file_for(scope))?.remove(name)),
        }
    }

    fn set(&self, scope: EnvScope, name: &str, value: &str) -> Result<(), AppError> {
        process::check_name(name)?;
        match scope {
            EnvScope::Process => process::set(name, value),
            _ => self.update(scope, name, |table| {
                table.insert(name.to_string(), value.to_string());
                true
            }),
        }
    }

    fn remove(&self, scope: EnvScope, name: &str) -> Result<(), AppError> {
        process::check_name(name)?;
        match scope {
            EnvScope::Process => process::remove(name),
            _ => self.update(scope, name, |table| table.remove(name).is_some()),
        }
    }
}
