//! Reading and writing wizard variables with user/machine precedence.

use tracing::warn;

use crate::app::AppContext;
use crate::domain::{AppError, WriteOutcome, normalize_path, path_status};
use crate::ports::{EnvScopeStore, ShortcutSource, ToolRunner};

pub fn get<E, T, S>(ctx: &AppContext<E, T, S>, name: &str) -> Result<Option<String>, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    ctx.environment().read(name)
}

/// Write `value`; variables bound to a component are treated as paths and normalized.
pub fn set<E, T, S>(ctx: &AppContext<E, T, S>, name: &str, value: &str) -> Result<WriteOutcome, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    let component = ctx.components().iter().find(|c| c.env_var() == Some(name));
    let value = if component.is_some() { normalize_path(value) } else { value.to_string() };
    if let Some(component) = component.filter(|_| !value.is_empty()) {
        if !path_status::is_path_valid(component, Some(&value)) {
            warn!(variable = name, %value, component = %component.name, "check file not found in directory");
        }
    }
    ctx.environment().write(name, Some(&value))
}

pub fn unset<E, T, S>(ctx: &AppContext<E, T, S>, name: &str) -> Result<WriteOutcome, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    ctx.environment().write(name, None)
}
