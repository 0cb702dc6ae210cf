//! Precedence rules for reading and writing variables across user and machine scope.

use tracing::{info, warn};

use crate::domain::{AppError, EnvScope, WriteOutcome};
use crate::ports::EnvScopeStore;

/// Scope a non-blank write lands in.
///
/// A variable that only exists machine-wide stays machine-wide. Everything else,
/// including a variable that exists nowhere yet, goes to the user scope, which
/// never needs elevation.
pub fn target_scope(has_user_value: bool, has_machine_value: bool) -> EnvScope {
    if has_machine_value && !has_user_value { EnvScope::Machine } else { EnvScope::User }
}

/// Layered view over an [`EnvScopeStore`].
pub struct EnvironmentVariableStore<'a, S: EnvScopeStore> {
    store: &'a S,
}

impl<'a, S: EnvScopeStore> EnvironmentVariableStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// User value if set, else machine value, else `None`.
    pub fn read(&self, name: &str) -> Result<Option<String>, AppError> {
        if let Some(value) = self.store.get(EnvScope::User, name)? {
            return Ok(Some(value));
        }
        self.store.get(EnvScope::Machine, name)
    }

    /// Set `name` at the highest scope it already exists at, mirrored into the process.
    ///
    /// A `None` or blank value clears the variable at user, process, and machine scope.
    pub fn write(&self, name: &str, value: Option<&str>) -> Result<WriteOutcome, AppError> {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return self.clear(name);
        };

        let has_user_value = self.store.get(EnvScope::User, name)?.is_some();
        let has_machine_value = self.store.get(EnvScope::Machine, name)?.is_some();
        let scope = target_scope(has_user_value, has_machine_value);

        let persisted = self.store.set(scope, name, value);
        self.store.set(EnvScope::Process, name, value)?;
        persisted?;

        info!(variable = name, %scope, "environment variable set");
        Ok(WriteOutcome::Set(scope))
    }

    fn clear(&self, name: &str) -> Result<WriteOutcome, AppError> {
        let mut first_error = None;

        for scope in [EnvScope::User, EnvScope::Process, EnvScope::Machine] {
            if let Err(err) = self.store.remove(scope, name) {
                warn!(variable = name, %scope, error = %err, "failed to clear environment variable");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                info!(variable = name, "environment variable cleared");
                Ok(WriteOutcome::Cleared)
            }
        }
    }
}
