//! Wizard progress: per-component path status and the four gated stages.

use std::fmt;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::path_status;
use crate::domain::{AppError, BuiltState, PathStatus, StatusLevel};
use crate::ports::{EnvScopeStore, ShortcutSource, ToolRunner};

pub const MSG_NO_GAME_DIR: &str = "Not a single game directory was specified";
pub const MSG_NO_SOLUTION: &str = "Plugin SDK project solution not found";
pub const MSG_NOT_BUILT: &str = "No binary has been built yet";
const MSG_NOT_SET: &str = "Not set";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Environment,
    Solution,
    Build,
    CreatePlugin,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Environment, Stage::Solution, Stage::Build, Stage::CreatePlugin];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Environment => "Environment variables",
            Stage::Solution => "Generate solution",
            Stage::Build => "Build SDK",
            Stage::CreatePlugin => "Create plugin",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentStatus {
    pub name: String,
    pub variable: String,
    pub value: Option<String>,
    pub status: PathStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildStatus {
    pub name: String,
    pub project: String,
    pub built: BuiltState,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageStatus {
    pub stage: Stage,
    /// `None` while an earlier stage blocks this one.
    pub status: Option<PathStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub components: Vec<ComponentStatus>,
    pub builds: Vec<BuildStatus>,
    pub stages: Vec<StageStatus>,
}

impl StatusReport {
    /// Furthest stage that is open for work.
    pub fn current_stage(&self) -> Stage {
        self.stages
            .iter()
            .filter(|s| s.status.is_some())
            .map(|s| s.stage)
            .max()
            .unwrap_or(Stage::Environment)
    }

    pub fn stage(&self, stage: Stage) -> Option<&PathStatus> {
        self.stages.iter().find(|s| s.stage == stage).and_then(|s| s.status.as_ref())
    }
}

/// Evaluate every bound component and walk the stages until one blocks.
pub fn execute<E, T, S>(ctx: &AppContext<E, T, S>) -> Result<StatusReport, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    let mut components = Vec::new();
    for component in ctx.components() {
        let Some(variable) = component.env_var() else { continue };
        let value = ctx.environment().read(variable)?;
        let status = path_status::evaluate(component, value.as_deref(), ctx.wizard_dir());
        components.push(ComponentStatus {
            name: component.name.clone(),
            variable: variable.to_string(),
            value,
            status,
        });
    }

    let mut report = StatusReport { components, builds: Vec::new(), stages: Vec::new() };
    let mut open = true;
    for stage in Stage::ALL {
        let status = if open {
            let (status, passes) = evaluate_stage(ctx, stage, &mut report)?;
            open = passes;
            Some(status)
        } else {
            None
        };
        report.stages.push(StageStatus { stage, status });
    }
    Ok(report)
}

fn evaluate_stage<E, T, S>(
    ctx: &AppContext<E, T, S>,
    stage: Stage,
    report: &mut StatusReport,
) -> Result<(PathStatus, bool), AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    match stage {
        Stage::Environment => Ok(environment_stage(ctx, report)),
        Stage::Solution => {
            let found = match ctx.sdk_layout() {
                Ok(layout) => layout.solution(ctx.settings().solution_name()).is_file(),
                Err(AppError::SdkDirNotSet) => false,
                Err(err) => return Err(err),
            };
            if found {
                Ok((PathStatus::ok(), true))
            } else {
                Ok((PathStatus::new(StatusLevel::Error, Some(MSG_NO_SOLUTION)), false))
            }
        }
        Stage::Build => {
            let layout = ctx.sdk_layout()?;
            report.builds = ctx
                .components()
                .iter()
                .filter(|c| c.is_buildable())
                .map(|c| BuildStatus {
                    name: c.name.clone(),
                    project: c.project.clone().unwrap_or_default(),
                    built: BuiltState::of(c, &layout),
                })
                .collect();
            let built = report.builds.iter().any(|b| b.built.any());
            if built {
                Ok((PathStatus::ok(), true))
            } else {
                Ok((PathStatus::new(StatusLevel::Error, Some(MSG_NOT_BUILT)), false))
            }
        }
        Stage::CreatePlugin => Ok((PathStatus::ok(), true)),
    }
}

/// Worst component status; a game directory with `Ok` status is required on top.
fn environment_stage<E, T, S>(ctx: &AppContext<E, T, S>, report: &mut StatusReport) -> (PathStatus, bool)
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    let mut worst = PathStatus::new(StatusLevel::None, None);
    for entry in &report.components {
        if entry.status.level > worst.level {
            worst = entry.status.clone();
        }
    }
    if worst.level == StatusLevel::Error {
        return (worst, false);
    }

    let is_game = |name: &str| {
        ctx.components().iter().any(|c| c.name == name && c.project.is_some())
    };
    let has_game_dir =
        report.components.iter().any(|e| is_game(&e.name) && e.status.level == StatusLevel::Ok);
    if !has_game_dir {
        for entry in report.components.iter_mut().filter(|e| is_game(&e.name)) {
            if entry.status.level == StatusLevel::None {
                entry.status = PathStatus::new(StatusLevel::Warning, Some(MSG_NOT_SET));
            }
        }
        return (PathStatus::new(StatusLevel::Warning, Some(MSG_NO_GAME_DIR)), false);
    }

    (worst, true)
}
