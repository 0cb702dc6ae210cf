//! Env command implementation.

use clap::Subcommand;

use crate::app::api::{self, GlobalOptions};
use crate::domain::{AppError, WriteOutcome};

#[derive(Subcommand)]
pub enum EnvCommands {
    /// Print a variable (user scope first, then machine)
    Get {
        /// Variable name
        name: String,
    },
    /// Set a variable where it already lives, user scope for new ones
    Set {
        /// Variable name
        name: String,
        /// New value; blank clears the variable
        value: String,
    },
    /// Clear a variable at user, process, and machine scope
    Unset {
        /// Variable name
        name: String,
    },
}

pub fn run_env(options: &GlobalOptions, command: EnvCommands) -> Result<i32, AppError> {
    match command {
        EnvCommands::Get { name } => match api::env_get(options, &name)? {
            Some(value) => {
                println!("{}", value);
                Ok(0)
            }
            None => {
                eprintln!("{} is not set", name);
                Ok(1)
            }
        },
        EnvCommands::Set { name, value } => {
            report(&name, api::env_set(options, &name, &value)?);
            Ok(0)
        }
        EnvCommands::Unset { name } => {
            report(&name, api::env_unset(options, &name)?);
            Ok(0)
        }
    }
}

fn report(name: &str, outcome: WriteOutcome) {
    match outcome {
        WriteOutcome::Set(scope) => println!("✅ Set {} ({} scope)", name, scope),
        WriteOutcome::Cleared => println!("✅ Cleared {}", name),
    }
}
