//! New plugin project generation through premake.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::components::find_component;
use crate::domain::{AppError, PluginName, SdkLayout};
use crate::ports::{EnvScopeStore, ShortcutSource, ToolInvocation, ToolRunner};

#[derive(Debug, Clone, Default)]
pub struct NewPluginRequest {
    pub name: String,
    /// Target games by descriptor name or `target` flag.
    pub targets: Vec<String>,
    /// Extensions by descriptor name or `targetProperty` flag.
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPluginOutcome {
    pub name: PluginName,
    pub project_dir: PathBuf,
    pub flags: Vec<String>,
}

/// Validate `raw` as a name for a plugin that does not exist yet.
pub fn validate_name(layout: &SdkLayout, raw: &str) -> Result<PluginName, AppError> {
    let name = PluginName::new(raw)?;
    if layout.plugin_solution(name.as_str()).exists() {
        return Err(AppError::PluginExists(name.to_string()));
    }
    Ok(name)
}

/// Resolve target and extension selections to premake flags, targets first.
pub fn resolve_flags<E, T, S>(ctx: &AppContext<E, T, S>, request: &NewPluginRequest) -> Result<Vec<String>, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    if request.targets.is_empty() {
        return Err(AppError::NoTargetSelected);
    }

    let targets = ctx.components().iter().filter(|c| c.is_plugin_target());
    let extensions = ctx.components().iter().filter(|c| c.is_plugin_extension());

    let mut flags: Vec<String> = Vec::new();
    for query in &request.targets {
        let component = find_component(targets.clone(), query, |c| c.target.as_deref())?;
        flags.extend(component.target.clone());
    }
    for query in &request.extensions {
        let component = find_component(extensions.clone(), query, |c| c.target_property.as_deref())?;
        flags.extend(component.target_property.clone());
    }

    let mut seen = Vec::new();
    flags.retain(|flag| {
        let fresh = !seen.contains(flag);
        seen.push(flag.clone());
        fresh
    });
    Ok(flags)
}

pub fn execute<E, T, S>(ctx: &AppContext<E, T, S>, request: &NewPluginRequest) -> Result<NewPluginOutcome, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    let layout = ctx.sdk_layout()?;
    let name = validate_name(&layout, &request.name)?;
    let flags = resolve_flags(ctx, request)?;

    let premake = layout.premake_executable();
    if !premake.is_file() {
        return Err(AppError::ToolNotFound(premake));
    }

    let project_dir = layout.plugin_project_dir(name.as_str());
    fs::create_dir_all(&project_dir)?;

    let invocation = ToolInvocation::new(&premake, &layout.premake_dir())
        .args(["--file=premake5.lua", "newplugin"])
        .arg(format!("--dir={}", project_dir.display()))
        .arg(format!("--name={name}"))
        .args(flags.iter().map(|flag| format!("--{flag}")));

    let code = ctx.tools().run(&invocation)?;
    if code != 0 {
        return Err(AppError::GeneratorFailed(code));
    }

    info!(plugin = %name, dir = %project_dir.display(), "plugin project generated");
    Ok(NewPluginOutcome { name, project_dir, flags })
}
