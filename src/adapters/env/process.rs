//! Process scope, shared by every host store.

use crate::domain::AppError;

/// Names every scope rejects: empty, or containing `=` or NUL.
pub(super) fn check_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(AppError::InvalidVariableName(name.to_string()));
    }
    Ok(())
}

pub(super) fn get(name: &str) -> Result<Option<String>, AppError> {
    check_name(name)?;
    Ok(std::env::var(name).ok())
}

pub(super) fn set(name: &str, value: &str) -> Result<(), AppError> {
    check_name(name)?;
    if value.contains('\0') {
        return Err(AppError::config_error(format!("value of '{name}' contains a NUL byte")));
    }
    // SAFETY: the wizard mutates its environment from the main thread only, before or
    // between child process launches; no other thread reads the environment concurrently.
    unsafe { std::env::set_var(name, value) };
    Ok(())
}

pub(super) fn remove(name: &str) -> Result<(), AppError> {
    check_name(name)?;
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(name) };
    Ok(())
}
