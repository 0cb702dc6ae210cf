//! Listing of loaded component descriptors.

use std::fmt::Write as _;

use crate::domain::{AppError, ComponentDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ComponentsFormat {
    #[default]
    Text,
    Json,
}

/// Render the descriptors in the requested format.
pub fn execute(components: &[ComponentDescriptor], format: ComponentsFormat) -> Result<String, AppError> {
    match format {
        ComponentsFormat::Json => Ok(serde_json::to_string_pretty(components)?),
        ComponentsFormat::Text => Ok(render_text(components)),
    }
}

fn roles(component: &ComponentDescriptor) -> Vec<String> {
    let mut roles = Vec::new();
    if let Some(var) = component.env_var() {
        let mandatory = if component.mandatory { ", mandatory" } else { "" };
        roles.push(format!("env {var}{mandatory}"));
    }
    if component.is_buildable() {
        roles.push(format!("build {}", component.project.as_deref().unwrap_or_default()));
    }
    if let Some(target) = &component.target {
        roles.push(format!("target --{target}"));
    }
    if let Some(property) = &component.target_property {
        roles.push(format!("extension --{property}"));
    }
    roles
}

fn render_text(components: &[ComponentDescriptor]) -> String {
    let mut out = String::new();
    for component in components {
        let roles = roles(component);
        if roles.is_empty() {
            let _ = writeln!(out, "{}", component.name);
        } else {
            let _ = writeln!(out, "{} ({})", component.name, roles.join("; "));
        }
        if let Some(check_file) = &component.check_file {
            let _ = writeln!(out, "    check file: {check_file}");
        }
        if let Some(info) = &component.info {
            let _ = writeln!(out, "    info: {info}");
        }
    }
    out
}
