use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for psdk-wizard operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Wizard settings file is invalid.
    #[error("{0}")]
    Config(String),

    /// Component descriptor file missing.
    #[error("The file '{}' was not found", .0.display())]
    ConfigNotFound(PathBuf),

    /// Component descriptor file is not a readable XML document.
    #[error("Failed to load components from '{}': {details}", path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// Descriptor file loaded but declared no usable component.
    #[error("No components declared in '{}'", .0.display())]
    NoComponents(PathBuf),

    /// Machine-scope environment write rejected by the host.
    #[error("Failed to set system env var \"{variable}\" (requires admin rights)")]
    Privilege { variable: String },

    /// Variable name the host cannot store.
    #[error("Invalid environment variable name '{0}'")]
    InvalidVariableName(String),

    /// PLUGIN_SDK_DIR is not set at any scope.
    #[error("PLUGIN_SDK_DIR is not set. Run 'psdk-wizard detect --apply' or 'psdk-wizard env set'.")]
    SdkDirNotSet,

    /// No component with the given name or flag.
    #[error("Component '{name}' not found. Available: {available}")]
    UnknownComponent { name: String, available: String },

    /// External tool is not where it should be.
    #[error("Can't find '{}'", .0.display())]
    ToolNotFound(PathBuf),

    /// External tool could not be run or reported an error.
    #[error("Error running '{tool}': {details}")]
    ToolFailed { tool: String, details: String },

    /// MSBuild returned a non-zero exit code.
    #[error("Build of '{project}' ({configuration}) failed with exit code {code}")]
    BuildFailed { project: String, configuration: String, code: i32 },

    /// Premake `newplugin` returned a non-zero exit code.
    #[error("Plugin generation failed with exit code {0}")]
    GeneratorFailed(i32),

    /// New plugin name rejected.
    #[error("Invalid plugin name '{name}': {reason}")]
    InvalidPluginName { name: String, reason: String },

    /// A generated plugin project with this name already exists.
    #[error("Plugin project '{0}' already exists")]
    PluginExists(String),

    /// Plugin generation requested without a target game.
    #[error("No target game has been selected")]
    NoTargetSelected,

    /// Build requested without any project/configuration pair.
    #[error("No project selected for build")]
    NoBuildSelected,

    /// Interactive prompt failure.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers and exit handling.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Config(_)
            | AppError::ConfigParse { .. }
            | AppError::UnknownComponent { .. }
            | AppError::InvalidVariableName(_)
            | AppError::InvalidPluginName { .. }
            | AppError::NoTargetSelected
            | AppError::NoBuildSelected
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_)
            | AppError::NoComponents(_)
            | AppError::SdkDirNotSet
            | AppError::ToolNotFound(_) => io::ErrorKind::NotFound,
            AppError::Privilege { .. } => io::ErrorKind::PermissionDenied,
            AppError::PluginExists(_) => io::ErrorKind::AlreadyExists,
            AppError::ToolFailed { .. }
            | AppError::BuildFailed { .. }
            | AppError::GeneratorFailed(_)
            | AppError::Prompt(_) => io::ErrorKind::Other,
            AppError::Json(_) => io::ErrorKind::InvalidData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privilege_error_names_the_variable() {
        let err = AppError::Privilege { variable: "GTA_SA_DIR".to_string() };
        assert_eq!(err.to_string(), "Failed to set system env var \"GTA_SA_DIR\" (requires admin rights)");
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn io_errors_keep_their_kind() {
        let err = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
