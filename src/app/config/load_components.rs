//! Component descriptor loading.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::domain::AppError;
use crate::domain::ComponentDescriptor;
use crate::domain::components::parse::parse_components;

/// Load every component declared in the XML document at `path`.
pub fn load_components(path: &Path) -> Result<Vec<ComponentDescriptor>, AppError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::ConfigNotFound(path.to_path_buf()),
        io::ErrorKind::InvalidData => {
            AppError::ConfigParse { path: path.to_path_buf(), details: err.to_string() }
        }
        _ => AppError::Io(err),
    })?;

    let components = parse_components(content.trim_start_matches('\u{feff}'))
        .map_err(|e| AppError::ConfigParse { path: path.to_path_buf(), details: e.to_string() })?;

    info!(file = %path.display(), count = components.len(), "components loaded");
    Ok(components)
}

/// Reject an empty component list; the wizard cannot do anything without one.
pub fn require_components(
    path: &Path,
    components: Vec<ComponentDescriptor>,
) -> Result<Vec<ComponentDescriptor>, AppError> {
    if components.is_empty() {
        return Err(AppError::NoComponents(path.to_path_buf()));
    }
    Ok(components)
}
