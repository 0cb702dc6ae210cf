//! Solution generation through the SDK's generator script.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{EnvScopeStore, ShortcutSource, ToolInvocation, ToolRunner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub solution: PathBuf,
    pub solution_exists: bool,
}

pub fn execute<E, T, S>(ctx: &AppContext<E, T, S>) -> Result<GenerateOutcome, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    let layout = ctx.sdk_layout()?;
    let script = layout.generate_script();
    if !script.is_file() {
        return Err(AppError::ToolNotFound(script));
    }

    let invocation = ToolInvocation::new(&script, &layout.generate_dir());
    let code = ctx.tools().run(&invocation)?;
    if code != 0 {
        return Err(AppError::ToolFailed {
            tool: script.display().to_string(),
            details: format!("exited with code {code}"),
        });
    }

    let solution = layout.solution(ctx.settings().solution_name());
    let solution_exists = solution.is_file();
    info!(solution = %solution.display(), solution_exists, "solution generator finished");
    Ok(GenerateOutcome { solution, solution_exists })
}
