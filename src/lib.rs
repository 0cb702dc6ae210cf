//! psdk-wizard: set up a Plugin-SDK checkout, build it, and scaffold new plugins.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BuildReport, BuildRequest, ComponentsFormat, GenerateOutcome, GlobalOptions, NewPluginOutcome,
    NewPluginRequest, Proposal, Stage, StatusReport,
};
pub use domain::{AppError, ComponentDescriptor, EnvScope, PathStatus, StatusLevel, WriteOutcome};
