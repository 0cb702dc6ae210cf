//! Shortcut targets from the desktop, the taskbar, and configured folders.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::shortcut;
use crate::ports::ShortcutSource;

const PINNED_TASKBAR: &str = r"Microsoft\Internet Explorer\Quick Launch\User Pinned\TaskBar";

/// Scans a fixed set of directories (non-recursively) for `.lnk` files.
#[derive(Debug, Clone, Default)]
pub struct ShortcutDirectories {
    dirs: Vec<PathBuf>,
}

impl ShortcutDirectories {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// User desktop, public desktop, pinned taskbar, then `extra`.
    pub fn for_host(extra: &[PathBuf]) -> Self {
        let mut dirs = Vec::new();
        if let Some(user) = directories::UserDirs::new() {
            if let Some(desktop) = user.desktop_dir() {
                dirs.push(desktop.to_path_buf());
            }
        }
        if let Some(public) = std::env::var_os("PUBLIC") {
            dirs.push(PathBuf::from(public).join("Desktop"));
        }
        if let Some(appdata) = std::env::var_os("APPDATA") {
            dirs.push(PathBuf::from(appdata).join(PINNED_TASKBAR));
        }
        dirs.extend(extra.iter().cloned());
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn shortcuts_in(dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            debug!(dir = %dir.display(), "shortcut directory not readable");
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && shortcut::is_shortcut(path))
            .collect();
        files.sort();
        files
    }
}

impl ShortcutSource for ShortcutDirectories {
    fn targets(&self) -> Vec<String> {
        self.dirs
            .iter()
            .flat_map(|dir| Self::shortcuts_in(dir))
            .map(|file| shortcut::resolve(&file))
            .filter(|target| !target.is_empty())
            .collect()
    }
}
