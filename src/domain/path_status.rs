//! Validity of the directory a component's environment variable points at.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::components::ComponentDescriptor;

/// Severity, ordered so the worst status of a group is its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    None,
    Ok,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::None => "-",
            StatusLevel::Ok => "ok",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStatus {
    pub level: StatusLevel,
    pub message: Option<String>,
}

impl PathStatus {
    pub fn new(level: StatusLevel, message: Option<&str>) -> Self {
        Self { level, message: message.map(String::from) }
    }

    pub fn ok() -> Self {
        Self::new(StatusLevel::Ok, None)
    }
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.level.label(), message),
            None => f.write_str(self.level.label()),
        }
    }
}

pub const MSG_NOT_SPECIFIED: &str = "Path not specified";
pub const MSG_DIR_MISSING: &str = "Specified directory does not exist";
pub const MSG_CHECK_FILE_MISSING: &str = "Specified directory does not contain expected files";
pub const MSG_SDK_ELSEWHERE: &str =
    "Path does not match location of wizard app; multiple Plugin-SDKs installed?";

/// Evaluate `value` (the variable's resolved content) for `component`.
///
/// `wizard_dir` is where the wizard runs from; the SDK root is expected there.
pub fn evaluate(component: &ComponentDescriptor, value: Option<&str>, wizard_dir: &Path) -> PathStatus {
    let severe = if component.mandatory { StatusLevel::Error } else { StatusLevel::Warning };

    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return if component.mandatory {
            PathStatus::new(StatusLevel::Error, Some(MSG_NOT_SPECIFIED))
        } else {
            PathStatus::new(StatusLevel::None, None)
        };
    };

    let dir = Path::new(value);
    if !dir.is_dir() {
        return PathStatus::new(severe, Some(MSG_DIR_MISSING));
    }

    if let Some(check_file) = &component.check_file {
        if !dir.join(check_file).is_file() {
            return PathStatus::new(severe, Some(MSG_CHECK_FILE_MISSING));
        }
    }

    if component.is_sdk_root() && !same_location(dir, wizard_dir) {
        return PathStatus::new(StatusLevel::Ok, Some(MSG_SDK_ELSEWHERE));
    }

    PathStatus::ok()
}

/// Whether the descriptor is satisfied by `value`: unset and optional, or present with its check file.
pub fn is_path_valid(component: &ComponentDescriptor, value: Option<&str>) -> bool {
    match value.filter(|v| !v.is_empty()) {
        None => !component.mandatory,
        Some(dir) => match &component.check_file {
            None => true,
            Some(check_file) => Path::new(dir).join(check_file).is_file(),
        },
    }
}

fn same_location(a: &Path, b: &Path) -> bool {
    comparable(a) == comparable(b)
}

fn comparable(path: &Path) -> String {
    let full = std::path::absolute(path).unwrap_or_else(|_| PathBuf::from(path));
    full.to_string_lossy().trim_end_matches(['\\', '/']).to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::components::PLUGIN_SDK_DIR;

    fn game(mandatory: bool) -> ComponentDescriptor {
        ComponentDescriptor {
            env_var_name: Some("GTA_SA_DIR".into()),
            check_file: Some("gta_sa.exe".into()),
            mandatory,
            ..ComponentDescriptor::new("GTA_San_Andreas")
        }
    }

    fn s(path: &Path) -> Option<String> {
        Some(path.to_string_lossy().into_owned())
    }

    #[test]
    fn unset_path_depends_on_mandatory() {
        let wizard = TempDir::new().unwrap();
        assert_eq!(evaluate(&game(true), None, wizard.path()).level, StatusLevel::Error);
        assert_eq!(evaluate(&game(false), None, wizard.path()).level, StatusLevel::None);
        assert_eq!(evaluate(&game(false), Some(""), wizard.path()).level, StatusLevel::None);
    }

    #[test]
    fn missing_directory_is_warning_or_error() {
        let wizard = TempDir::new().unwrap();
        let gone = wizard.path().join("nowhere");

        let optional = evaluate(&game(false), s(&gone).as_deref(), wizard.path());
        assert_eq!(optional.level, StatusLevel::Warning);
        assert_eq!(optional.message.as_deref(), Some(MSG_DIR_MISSING));

        let mandatory = evaluate(&game(true), s(&gone).as_deref(), wizard.path());
        assert_eq!(mandatory.level, StatusLevel::Error);
    }

    #[test]
    fn check_file_must_exist() {
        let wizard = TempDir::new().unwrap();
        let game_dir = TempDir::new().unwrap();

        let status = evaluate(&game(false), s(game_dir.path()).as_deref(), wizard.path());
        assert_eq!(status.message.as_deref(), Some(MSG_CHECK_FILE_MISSING));
        assert!(!is_path_valid(&game(false), s(game_dir.path()).as_deref()));

        fs::write(game_dir.path().join("gta_sa.exe"), b"MZ").unwrap();
        let status = evaluate(&game(false), s(game_dir.path()).as_deref(), wizard.path());
        assert_eq!(status, PathStatus::ok());
        assert!(is_path_valid(&game(false), s(game_dir.path()).as_deref()));
    }

    #[test]
    fn sdk_root_elsewhere_is_ok_with_note() {
        let wizard = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let sdk = ComponentDescriptor {
            env_var_name: Some(PLUGIN_SDK_DIR.into()),
            mandatory: true,
            ..ComponentDescriptor::new("Core_SDK")
        };

        let elsewhere = evaluate(&sdk, s(other.path()).as_deref(), wizard.path());
        assert_eq!(elsewhere.level, StatusLevel::Ok);
        assert_eq!(elsewhere.message.as_deref(), Some(MSG_SDK_ELSEWHERE));

        let with_slash = format!("{}/", wizard.path().display());
        assert_eq!(evaluate(&sdk, Some(&with_slash), wizard.path()), PathStatus::ok());
    }

    #[test]
    fn unset_optional_is_valid() {
        assert!(is_path_valid(&game(false), None));
        assert!(!is_path_valid(&game(true), None));
    }

    #[test]
    fn levels_order_by_severity() {
        let worst = [StatusLevel::Ok, StatusLevel::Error, StatusLevel::None, StatusLevel::Warning]
            .into_iter()
            .max();
        assert_eq!(worst, Some(StatusLevel::Error));
    }
}
