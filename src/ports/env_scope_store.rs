use crate::domain::{AppError, EnvScope};

/// Port over the host's scoped environment variable storage.
pub trait EnvScopeStore {
    /// Value of `name` at `scope`, `None` when unset.
    fn get(&self, scope: EnvScope, name: &str) -> Result<Option<String>, AppError>;

    /// Set `name` at `scope`.
    ///
    /// Implementations report a rejected machine-scope write as `AppError::Privilege`.
    fn set(&self, scope: EnvScope, name: &str, value: &str) -> Result<(), AppError>;

    /// Remove `name` at `scope`. Removing an unset variable succeeds.
    fn remove(&self, scope: EnvScope, name: &str) -> Result<(), AppError>;
}
