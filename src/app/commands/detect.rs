//! Auto-detection of unset installation directories.

use serde::Serialize;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::detection::match_check_file;
use crate::domain::{AppError, WriteOutcome, normalize_path};
use crate::ports::{EnvScopeStore, ShortcutSource, ToolRunner};

/// A value proposed for an unset variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proposal {
    pub component: String,
    pub variable: String,
    pub value: String,
}

/// Propose values for every bound variable that is currently unset.
///
/// The SDK root is the wizard directory; everything else is matched against shortcut
/// targets by its check file. Shortcuts are only scanned when needed.
pub fn propose<E, T, S>(ctx: &AppContext<E, T, S>) -> Result<Vec<Proposal>, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    let mut targets: Option<Vec<String>> = None;
    let mut proposals = Vec::new();

    for component in ctx.components() {
        let Some(variable) = component.env_var() else { continue };
        let current = ctx.environment().read(variable)?;
        if current.is_some_and(|v| !v.trim().is_empty()) {
            continue;
        }

        let value = if component.is_sdk_root() {
            Some(ctx.wizard_dir().to_string_lossy().into_owned())
        } else if let Some(check_file) = component.check_file.as_deref() {
            let targets = targets.get_or_insert_with(|| {
                let found = ctx.shortcuts().targets();
                debug!(count = found.len(), "shortcut targets collected");
                found
            });
            match_check_file(targets.iter(), check_file)
        } else {
            None
        };

        if let Some(value) = value.map(|v| normalize_path(&v)).filter(|v| !v.is_empty()) {
            proposals.push(Proposal {
                component: component.name.clone(),
                variable: variable.to_string(),
                value,
            });
        }
    }

    Ok(proposals)
}

/// Write proposals in order, stopping at the first failure.
pub fn apply<E, T, S>(ctx: &AppContext<E, T, S>, proposals: &[Proposal]) -> Result<Vec<WriteOutcome>, AppError>
where
    E: EnvScopeStore,
    T: ToolRunner,
    S: ShortcutSource,
{
    proposals
        .iter()
        .map(|p| {
            let outcome = ctx.environment().write(&p.variable, Some(&p.value))?;
            info!(variable = %p.variable, value = %p.value, "detected path applied");
            Ok(outcome)
        })
        .collect()
}
