use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::domain::{AppError, EnvScope};
use crate::ports::EnvScopeStore;

/// In-memory scoped environment for testing.
#[derive(Default)]
pub struct MemoryEnvStore {
    values: RefCell<HashMap<(EnvScope, String), String>>,
    removals: RefCell<Vec<EnvScope>>,
    deny_machine: Cell<bool>,
}

impl MemoryEnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, scope: EnvScope, name: &str, value: &str) -> Self {
        self.put(scope, name, value);
        self
    }

    /// Reject machine-scope writes and removals as a non-elevated process would see.
    pub fn deny_machine_writes(self) -> Self {
        self.deny_machine.set(true);
        self
    }

    pub fn put(&self, scope: EnvScope, name: &str, value: &str) {
        self.values.borrow_mut().insert((scope, name.to_string()), value.to_string());
    }

    pub fn value(&self, scope: EnvScope, name: &str) -> Option<String> {
        self.values.borrow().get(&(scope, name.to_string())).cloned()
    }

    /// Scopes passed to `remove`, in call order.
    pub fn removals(&self) -> Vec<EnvScope> {
        self.removals.borrow().clone()
    }

    fn check_privilege(&self, scope: EnvScope, name: &str) -> Result<(), AppError> {
        if scope == EnvScope::Machine && self.deny_machine.get() {
            return Err(AppError::Privilege { variable: name.to_string() });
        }
        Ok(())
    }
}

impl EnvScopeStore for MemoryEnvStore {
    fn get(&self, scope: EnvScope, name: &str) -> Result<Option<String>, AppError> {
        Ok(self.value(scope, name))
    }

    fn set(&self, scope: EnvScope, name: &str, value: &str) -> Result<(), AppError> {
        self.check_privilege(scope, name)?;
        self.put(scope, name, value);
        Ok(())
    }

    fn remove(&self, scope: EnvScope, name: &str) -> Result<(), AppError> {
        self.removals.borrow_mut().push(scope);
        self.check_privilege(scope, name)?;
        self.values.borrow_mut().remove(&(scope, name.to_string()));
        Ok(())
    }
}
