//! CLI Adapter.

mod env;
mod wizard;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::api::{self, BuildRequest, ComponentsFormat, GlobalOptions, NewPluginRequest};
use crate::app::logging;
use crate::domain::{AppError, StatusLevel};

#[derive(Parser)]
#[command(name = "psdk-wizard")]
#[command(version)]
#[command(
    about = "Set up the Plugin-SDK: environment paths, solution, builds, and new plugins",
    long_about = None
)]
struct Cli {
    /// Settings file (defaults to ./psdk-wizard.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show wizard stages and per-component path status
    #[clap(visible_alias = "st")]
    Status,
    /// List loaded component descriptors
    #[clap(visible_alias = "ls")]
    Components {
        /// Output format
        #[arg(long, value_enum, default_value_t = ComponentsFormat::Text)]
        format: ComponentsFormat,
    },
    /// Read and write wizard environment variables
    Env {
        #[command(subcommand)]
        command: env::EnvCommands,
    },
    /// Print the target of a .lnk shortcut file
    Shortcut {
        /// Shortcut file
        file: PathBuf,
    },
    /// Propose values for unset variables from the wizard location and shortcuts
    Detect {
        /// Write the proposals to the environment
        #[arg(long)]
        apply: bool,
    },
    /// Generate the SDK solution
    #[clap(visible_alias = "g")]
    Generate,
    /// Build SDK projects with MSBuild
    #[clap(visible_alias = "b")]
    Build {
        /// Component or project to build (repeatable)
        #[arg(short, long = "project", value_name = "NAME")]
        projects: Vec<String>,
        /// Build every buildable component
        #[arg(long, conflicts_with = "projects")]
        all: bool,
        /// Debug configuration only
        #[arg(long)]
        debug: bool,
        /// Release configuration only
        #[arg(long)]
        release: bool,
    },
    /// Generate a new plugin project
    New {
        /// Plugin name
        name: String,
        /// Target game, by name or flag (repeatable)
        #[arg(short, long = "target", value_name = "TARGET")]
        targets: Vec<String>,
        /// Extension, by name or flag (repeatable)
        #[arg(short, long = "extension", value_name = "EXTENSION")]
        extensions: Vec<String>,
    },
    /// Walk through every step interactively
    #[clap(visible_alias = "w")]
    Wizard,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let options = GlobalOptions { config: cli.config };

    let result: Result<i32, AppError> = match cli.command {
        Commands::Status => run_status(&options),
        Commands::Components { format } => {
            api::components(&options, format).map(|out| {
                print!("{out}");
                0
            })
        }
        Commands::Env { command } => env::run_env(&options, command),
        Commands::Shortcut { file } => Ok(run_shortcut(&file)),
        Commands::Detect { apply } => run_detect(&options, apply).map(|_| 0),
        Commands::Generate => run_generate(&options).map(|_| 0),
        Commands::Build { projects, all, debug, release } => {
            run_build(&options, &BuildRequest { projects, all, debug, release }).map(|_| 0)
        }
        Commands::New { name, targets, extensions } => {
            run_new(&options, &NewPluginRequest { name, targets, extensions }).map(|_| 0)
        }
        Commands::Wizard => wizard::run_wizard(&options).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_status(options: &GlobalOptions) -> Result<i32, AppError> {
    let report = api::status(options)?;
    print_status(&report);
    Ok(0)
}

pub(crate) fn print_status(report: &api::StatusReport) {
    println!("Paths:");
    for entry in &report.components {
        let value = entry.value.as_deref().filter(|v| !v.is_empty()).unwrap_or("<not set>");
        println!("  [{:<7}] {} = {}", entry.status.level.label(), entry.variable, value);
        if let Some(message) = &entry.status.message {
            println!("            {}", message);
        }
    }

    println!("\nStages:");
    for (i, stage) in report.stages.iter().enumerate() {
        match &stage.status {
            Some(status) if status.level == StatusLevel::Ok && status.message.is_none() => {
                println!("  {}. {}: ✅", i + 1, stage.stage)
            }
            Some(status) => println!("  {}. {}: {}", i + 1, stage.stage, status),
            None => println!("  {}. {}: locked", i + 1, stage.stage),
        }
    }

    if !report.builds.is_empty() {
        println!("\nBinaries:");
        for build in &report.builds {
            println!("  {} ({}): {}", build.name, build.project, build.built.describe());
        }
    }
}

fn run_shortcut(file: &std::path::Path) -> i32 {
    let target = api::shortcut_target(file);
    if target.is_empty() {
        eprintln!("Error: Could not resolve shortcut target of '{}'", file.display());
        return 1;
    }
    println!("{}", target);
    0
}

fn run_detect(options: &GlobalOptions, apply: bool) -> Result<(), AppError> {
    let proposals = api::detect(options, apply)?;
    if proposals.is_empty() {
        println!("Nothing to detect: every variable is set or no match was found");
        return Ok(());
    }

    for proposal in &proposals {
        println!("  {} = {}  ({})", proposal.variable, proposal.value, proposal.component);
    }
    if apply {
        println!("✅ Applied {} detected path(s)", proposals.len());
    } else {
        println!("Run again with --apply to write these values");
    }
    Ok(())
}

fn run_generate(options: &GlobalOptions) -> Result<(), AppError> {
    let outcome = api::generate(options)?;
    if outcome.solution_exists {
        println!("✅ Generated {}", outcome.solution.display());
    } else {
        println!("⚠️  Generator finished but {} was not found", outcome.solution.display());
    }
    Ok(())
}

fn run_build(options: &GlobalOptions, request: &BuildRequest) -> Result<(), AppError> {
    let report = api::build(options, request)?;
    for step in &report.completed {
        println!("✅ Built {} ({})", step.project, step.configuration);
    }
    Ok(())
}

fn run_new(options: &GlobalOptions, request: &NewPluginRequest) -> Result<(), AppError> {
    let outcome = api::new_plugin(options, request)?;
    println!("✅ Created plugin {} at {}", outcome.name, outcome.project_dir.display());
    Ok(())
}
