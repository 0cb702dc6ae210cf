//! Building SDK projects with MSBuild.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::components::find_component;
use crate::domain::{AppError, BuildConfiguration, ComponentDescriptor};
use crate::ports::{EnvScopeStore, ShortcutSource, ToolInvocation, ToolRunner};

const VSWHERE_RELATIVE: &str = r"Microsoft Visual Studio\Installer\vswhere.exe";
const PROGRAM_FILES_X86_FALLBACK: &str = r"C:\Program Files (x86)";
/// Visual Studio 2022 or later with MSBuild.
const VSWHERE_ARGS: [&str; 8] = [
    "-latest",
    "-prerelease",
    "-version",
    "[17,)",
    "-requires",
    "Microsoft.Component.MSBuild",
    "-find",
    r"MSBuild\**\Bin\MSBuild.exe",
];

/// Which projects and configurations to build.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    /// Descriptor names (or project names); ignored when `all` is set.
    pub projects: Vec<String>,
    pub all: bool,
    pub debug: bool,
    pub release: bool,
}

impl BuildRequest {
    /// Selected configurations; neither flag means both.
    pub fn configurations(&self) -> Vec<BuildConfiguration> {
        match (self.debug, self.release) {
            (true, false) => vec![BuildConfiguration::Debug],
            (false, true) => vec![BuildConfiguration::Release],
            _ => BuildConfiguration::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildStep {
    pub component: String,
    pub project: String,
    pub configuration: BuildConfiguration,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub msbuild: PathBuf,
    pub completed: Vec<BuildStep>,
}

/// Order the requested builds: descriptor order, Debug before Release.
pub fn plan(components: &[ComponentDescriptor], request: &BuildRequest) -> Result<Vec<BuildStep>, AppError> {
    let buildable = components.iter().filter(|c| c.is_buildable());

    let selected: Vec<&ComponentDescriptor> = if request.all {
        buildable.collect()
    } else {
        let mut picked = Vec::new();
        for query in &request.projects {
            picked.push(find_component(buildable.clone(), query, |c| c.project.as_deref())?);
        }
        buildable.filter(|c| picked.iter().any(|p| p.name == c.name)).collect()
    };

    let steps: Vec<BuildStep> = selected
        .into_iter()
        .flat_map(|c| {
            request.configurations().into_iter().map(move |configuration| BuildStep {
                component: c.name.clone(),
                project: c.project.clone().unwrap_or_default(),
                configuration,
            })
        })
        .collect();

    if steps.is_empty() {
        return Err(AppError::NoBuildSelected);
    }
    Ok(steps)
}

/// Plan and build the request.
pub fn execute<E, T, S>(ctx: &AppContext<E, T, S>, request: &BuildRequest) -> Result<BuildReport, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    let steps = plan(ctx.components(), request)?;
    run_steps(ctx, steps)
}

/// Build `steps` in order; the first failure stops the run.
pub fn run_steps<E, T, S>(ctx: &AppContext<E, T, S>, steps: Vec<BuildStep>) -> Result<BuildReport, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    if steps.is_empty() {
        return Err(AppError::NoBuildSelected);
    }
    let layout = ctx.sdk_layout()?;
    let msbuild = locate_msbuild(ctx)?;
    let solution = ctx.settings().solution_name();

    let mut completed = Vec::new();
    for step in steps {
        let invocation = ToolInvocation::new(&msbuild, layout.root()).args([
            solution.to_string(),
            format!("/t:{}", step.project),
            format!("/property:Configuration={}", step.configuration.msbuild_name()),
            "/m".to_string(),
        ]);
        info!(project = %step.project, configuration = %step.configuration, "building");

        let code = ctx.tools().run(&invocation)?;
        if code != 0 {
            return Err(AppError::BuildFailed {
                project: step.project,
                configuration: step.configuration.to_string(),
                code,
            });
        }
        completed.push(step);
    }

    Ok(BuildReport { msbuild, completed })
}

/// MSBuild from settings, else from vswhere at its fixed install location.
pub fn locate_msbuild<E, T, S>(ctx: &AppContext<E, T, S>) -> Result<PathBuf, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    if let Some(msbuild) = &ctx.settings().build.msbuild {
        if !msbuild.is_file() {
            return Err(AppError::ToolNotFound(msbuild.clone()));
        }
        debug!(msbuild = %msbuild.display(), "using configured MSBuild");
        return Ok(msbuild.clone());
    }

    let vswhere = vswhere_path();
    if !vswhere.is_file() {
        return Err(AppError::ToolNotFound(vswhere));
    }
    query_vswhere(ctx.tools(), &vswhere, ctx.wizard_dir())
}

fn vswhere_path() -> PathBuf {
    let program_files = std::env::var_os("ProgramFiles(x86)")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(PROGRAM_FILES_X86_FALLBACK));
    program_files.join(VSWHERE_RELATIVE)
}

/// Ask vswhere for the newest MSBuild; the first output line wins.
pub fn query_vswhere<T: ToolRunner>(runner: &T, vswhere: &Path, cwd: &Path) -> Result<PathBuf, AppError> {
    let output = runner.capture(&ToolInvocation::new(vswhere, cwd).args(VSWHERE_ARGS))?;
    if output.code != 0 {
        return Err(AppError::ToolFailed {
            tool: "vswhere.exe".to_string(),
            details: format!("exited with error code {}", output.code),
        });
    }

    let first = output.stdout.lines().map(str::trim).find(|line| !line.is_empty());
    match first {
        Some(path) => {
            debug!(msbuild = path, "MSBuild located");
            Ok(PathBuf::from(path))
        }
        None => Err(AppError::ToolFailed {
            tool: "vswhere.exe".to_string(),
            details: "Visual Studio 2022 or later with MSBuild not found".to_string(),
        }),
    }
}
