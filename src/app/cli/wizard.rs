//! Interactive walk-through of the wizard stages.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect, Select};

use crate::app::api::{GlobalOptions, HostContext};
use crate::app::commands::build::{self, BuildStep};
use crate::app::commands::new_plugin::{self, NewPluginRequest};
use crate::app::commands::status::{self, Stage};
use crate::app::commands::{detect, env, generate};
use crate::app::{api, cli::print_status};
use crate::domain::{AppError, BuildConfiguration, BuiltState, PLUGIN_SDK_DIR, WriteOutcome, normalize_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EditPaths,
    DetectPaths,
    Generate,
    Build,
    CreatePlugin,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::EditPaths => "Edit paths",
            Action::DetectPaths => "Auto-detect unset paths",
            Action::Generate => "Generate solution",
            Action::Build => "Build SDK",
            Action::CreatePlugin => "Create new plugin",
            Action::Quit => "Quit",
        }
    }
}

pub fn run_wizard(options: &GlobalOptions) -> Result<(), AppError> {
    let ctx = api::open(options)?;

    let sdk_dir = ctx.environment().read(PLUGIN_SDK_DIR)?;
    if sdk_dir.is_none_or(|dir| dir.trim().is_empty()) {
        detect_paths(&ctx)?;
    }

    loop {
        let report = status::execute(&ctx)?;
        println!();
        print_status(&report);
        println!();

        let stage = report.current_stage();
        let mut actions = vec![Action::EditPaths, Action::DetectPaths];
        if stage >= Stage::Solution {
            actions.push(Action::Generate);
        }
        if stage >= Stage::Build {
            actions.push(Action::Build);
        }
        if stage >= Stage::CreatePlugin {
            actions.push(Action::CreatePlugin);
        }
        actions.push(Action::Quit);

        let suggested = match stage {
            Stage::Environment => Action::EditPaths,
            Stage::Solution => Action::Generate,
            Stage::Build => Action::Build,
            Stage::CreatePlugin => Action::CreatePlugin,
        };
        let items: Vec<&str> = actions.iter().map(Action::label).collect();
        let default = actions.iter().position(|a| *a == suggested).unwrap_or(0);

        let choice = Select::new().with_prompt("Next step").items(&items).default(default).interact_opt();
        let Some(index) = prompt(choice)?.flatten() else {
            return Ok(());
        };

        let result = match actions[index] {
            Action::EditPaths => edit_paths(&ctx),
            Action::DetectPaths => detect_paths(&ctx),
            Action::Generate => generate_solution(&ctx),
            Action::Build => build_projects(&ctx),
            Action::CreatePlugin => create_plugin(&ctx),
            Action::Quit => return Ok(()),
        };

        match result {
            Err(err @ AppError::Prompt(_)) => return Err(err),
            Err(err) => eprintln!("Error: {}", err),
            Ok(()) => {}
        }
    }
}

/// Ctrl-C while prompting counts as "no answer".
fn prompt<T>(result: Result<T, DialoguerError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn confirm(question: &str, default: bool) -> Result<bool, AppError> {
    let answer = Confirm::new().with_prompt(question).default(default).interact_opt();
    Ok(prompt(answer)?.flatten().unwrap_or(false))
}

fn report_write(variable: &str, outcome: &WriteOutcome) {
    match outcome {
        WriteOutcome::Set(scope) => println!("✅ {} saved ({} scope)", variable, scope),
        WriteOutcome::Cleared => println!("✅ {} cleared", variable),
    }
}

fn detect_paths(ctx: &HostContext) -> Result<(), AppError> {
    let proposals = detect::propose(ctx)?;
    if proposals.is_empty() {
        println!("No unset path could be detected");
        return Ok(());
    }

    println!("Detected paths:");
    for proposal in &proposals {
        println!("  {} = {}", proposal.variable, proposal.value);
    }
    if !confirm("Use the detected paths?", true)? {
        return Ok(());
    }

    for proposal in &proposals {
        match ctx.environment().write(&proposal.variable, Some(&proposal.value)) {
            Ok(outcome) => report_write(&proposal.variable, &outcome),
            Err(err @ AppError::Privilege { .. }) => eprintln!("Error: {}", err),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn edit_paths(ctx: &HostContext) -> Result<(), AppError> {
    println!("Enter a directory for each variable; leave blank to clear it.");
    for component in ctx.components() {
        let Some(variable) = component.env_var() else { continue };
        let current = ctx.value_of(component)?.unwrap_or_default();

        let input = Input::<String>::new()
            .with_prompt(format!("{} ({})", component.name, variable))
            .with_initial_text(current.clone())
            .allow_empty(true)
            .interact_text();
        let Some(entered) = prompt(input)? else {
            return Ok(());
        };
        if normalize_path(&entered) == current {
            continue;
        }

        match env::set(ctx, variable, &entered) {
            Ok(outcome) => report_write(variable, &outcome),
            Err(err @ AppError::Privilege { .. }) => eprintln!("Error: {}", err),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn generate_solution(ctx: &HostContext) -> Result<(), AppError> {
    let outcome = generate::execute(ctx)?;
    if outcome.solution_exists {
        println!("✅ Generated {}", outcome.solution.display());
    } else {
        println!("⚠️  Generator finished but {} was not found", outcome.solution.display());
    }
    Ok(())
}

fn build_projects(ctx: &HostContext) -> Result<(), AppError> {
    let layout = ctx.sdk_layout()?;
    let mut steps = Vec::new();
    let mut items = Vec::new();
    let mut defaults = Vec::new();

    for component in ctx.components().iter().filter(|c| c.is_buildable()) {
        let built = BuiltState::of(component, &layout);
        for configuration in BuildConfiguration::ALL {
            items.push(format!("{} {} ({})", built.action(configuration), component.name, configuration));
            defaults.push(!built.has(configuration));
            steps.push(BuildStep {
                component: component.name.clone(),
                project: component.project.clone().unwrap_or_default(),
                configuration,
            });
        }
    }

    let picked = MultiSelect::new()
        .with_prompt("Select projects to build (space toggles)")
        .items(&items)
        .defaults(&defaults)
        .interact_opt();
    let Some(picked) = prompt(picked)?.flatten() else {
        return Ok(());
    };

    let selected: Vec<BuildStep> =
        steps.into_iter().enumerate().filter(|(i, _)| picked.contains(i)).map(|(_, s)| s).collect();
    let report = build::run_steps(ctx, selected)?;
    for step in &report.completed {
        println!("✅ Built {} ({})", step.project, step.configuration);
    }
    Ok(())
}

fn create_plugin(ctx: &HostContext) -> Result<(), AppError> {
    let layout = ctx.sdk_layout()?;

    let name = Input::<String>::new()
        .with_prompt("Plugin name")
        .validate_with(|input: &String| -> Result<(), String> {
            new_plugin::validate_name(&layout, input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text();
    let Some(name) = prompt(name)? else {
        return Ok(());
    };

    let targets: Vec<_> = ctx.components().iter().filter(|c| c.is_plugin_target()).collect();
    let target_items: Vec<String> = targets
        .iter()
        .map(|c| format!("{}: {}", c.name, BuiltState::of(c, &layout).describe()))
        .collect();
    let picked = MultiSelect::new().with_prompt("Target games").items(&target_items).interact_opt();
    let Some(picked_targets) = prompt(picked)?.flatten() else {
        return Ok(());
    };
    if picked_targets.is_empty() {
        return Err(AppError::NoTargetSelected);
    }

    let extensions: Vec<_> = ctx.components().iter().filter(|c| c.is_plugin_extension()).collect();
    let mut picked_extensions = Vec::new();
    if !extensions.is_empty() {
        let items: Vec<String> = extensions
            .iter()
            .map(|c| match &c.info {
                Some(info) => format!("{} ({})", c.name, info),
                None => c.name.clone(),
            })
            .collect();
        let picked = MultiSelect::new().with_prompt("Extensions").items(&items).interact_opt();
        let Some(picked) = prompt(picked)?.flatten() else {
            return Ok(());
        };
        picked_extensions = picked;
    }

    let request = NewPluginRequest {
        name,
        targets: picked_targets.iter().map(|&i| targets[i].name.clone()).collect(),
        extensions: picked_extensions.iter().map(|&i| extensions[i].name.clone()).collect(),
    };
    let outcome = new_plugin::execute(ctx, &request)?;
    println!("✅ Created plugin {} at {}", outcome.name, outcome.project_dir.display());
    Ok(())
}
