//! Wizard steps, one module per CLI command.

pub mod build;
pub mod components;
pub mod detect;
pub mod env;
pub mod generate;
pub mod new_plugin;
pub mod status;
