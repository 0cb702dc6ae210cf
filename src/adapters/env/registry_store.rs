//! Windows registry backing for the user and machine scopes.

use std::io;

use tracing::debug;
use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_SET_VALUE};

use super::process;
use crate::domain::{AppError, EnvScope};
use crate::ports::EnvScopeStore;

const USER_KEY: &str = "Environment";
const MACHINE_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryEnvStore;

impl RegistryEnvStore {
    pub fn new() -> Self {
        Self
    }

    fn open(scope: EnvScope, access: u32) -> io::Result<RegKey> {
        match scope {
            EnvScope::Machine => RegKey::predef(HKEY_LOCAL_MACHINE).open_subkey_with_flags(MACHINE_KEY, access),
            _ => RegKey::predef(HKEY_CURRENT_USER).open_subkey_with_flags(USER_KEY, access),
        }
    }

    /// Read access only; removing a missing machine value must not need elevation.
    fn has_value(scope: EnvScope, name: &str) -> Result<bool, AppError> {
        let key = match Self::open(scope, KEY_READ) {
            Ok(key) => key,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err.into()),
        };
        match key.get_raw_value(name) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn write_error(scope: EnvScope, name: &str, err: io::Error) -> AppError {
        if scope == EnvScope::Machine && err.kind() == io::ErrorKind::PermissionDenied {
            AppError::Privilege { variable: name.to_string() }
        } else {
            err.into()
        }
    }
}

impl EnvScopeStore for RegistryEnvStore {
    fn get(&self, scope: EnvScope, name: &str) -> Result<Option<String>, AppError> {
        if scope == EnvScope::Process {
            return process::get(name);
        }
        let key = match Self::open(scope, KEY_READ) {
            Ok(key) => key,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match key.get_value::<String, _>(name) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, scope: EnvScope, name: &str, value: &str) -> Result<(), AppError> {
        if scope == EnvScope::Process {
            return process::set(name, value);
        }
        let key = Self::open(scope, KEY_SET_VALUE).map_err(|e| Self::write_error(scope, name, e))?;
        key.set_value(name, &value).map_err(|e| Self::write_error(scope, name, e))?;
        debug!(variable = name, %scope, "registry value written");
        broadcast::environment_changed();
        Ok(())
    }

    fn remove(&self, scope: EnvScope, name: &str) -> Result<(), AppError> {
        if scope == EnvScope::Process {
            return process::remove(name);
        }
        if !Self::has_value(scope, name)? {
            return Ok(());
        }
        let key = Self::open(scope, KEY_SET_VALUE).map_err(|e| Self::write_error(scope, name, e))?;
        match key.delete_value(name) {
            Ok(()) => {
                debug!(variable = name, %scope, "registry value deleted");
                broadcast::environment_changed();
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::write_error(scope, name, err)),
        }
    }
}

mod broadcast {
    use std::ptr;

    use windows_sys::Win32::UI::WindowsAndMessaging::{
        HWND_BROADCAST, SMTO_ABORTIFHUNG, SendMessageTimeoutW, WM_SETTINGCHANGE,
    };

    /// Tell running shells that the persistent environment changed.
    pub(super) fn environment_changed() {
        let section: Vec<u16> = "Environment".encode_utf16().chain(Some(0)).collect();
        // SAFETY: `section` is a NUL-terminated UTF-16 buffer that outlives the call,
        // and a null result pointer is permitted.
        unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                0,
                section.as_ptr() as isize,
                SMTO_ABORTIFHUNG,
                5000,
                ptr::null_mut(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique(tag: &str) -> String {
        format!("PSDK_WIZARD_TEST_{}_{}", tag, std::process::id())
    }

    #[test]
    fn removing_unset_machine_variable_succeeds() {
        let store = RegistryEnvStore::new();
        let name = unique("NEVER_SET");

        assert_eq!(store.get(EnvScope::Machine, &name).unwrap(), None);
        assert!(store.remove(EnvScope::Machine, &name).is_ok());
    }

    #[test]
    fn user_variable_round_trips() {
        let store = RegistryEnvStore::new();
        let name = unique("USER");

        store.set(EnvScope::User, &name, r"D:\Games\GTA SA").unwrap();
        assert_eq!(store.get(EnvScope::User, &name).unwrap().as_deref(), Some(r"D:\Games\GTA SA"));

        store.remove(EnvScope::User, &name).unwrap();
        assert_eq!(store.get(EnvScope::User, &name).unwrap(), None);
        store.remove(EnvScope::User, &name).unwrap();
    }
}
