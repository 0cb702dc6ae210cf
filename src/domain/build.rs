//! Build configurations and the artifacts they leave in `output/lib`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::components::ComponentDescriptor;
use super::sdk_layout::SdkLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuildConfiguration {
    Debug,
    Release,
}

impl BuildConfiguration {
    pub const ALL: [BuildConfiguration; 2] = [BuildConfiguration::Debug, BuildConfiguration::Release];

    /// Configuration name as declared in the solution.
    pub fn msbuild_name(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "zDebug",
            BuildConfiguration::Release => "Release",
        }
    }

    fn artifact_suffix(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "_d",
            BuildConfiguration::Release => "",
        }
    }

    /// Library produced for `project_output` in this configuration.
    pub fn artifact(&self, layout: &SdkLayout, project_output: &str) -> PathBuf {
        layout.output_lib_dir().join(format!("{project_output}{}.lib", self.artifact_suffix()))
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildConfiguration::Debug => f.write_str("Debug"),
            BuildConfiguration::Release => f.write_str("Release"),
        }
    }
}

/// Which configurations of a component have been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuiltState {
    pub debug: bool,
    pub release: bool,
}

impl BuiltState {
    pub fn of(component: &ComponentDescriptor, layout: &SdkLayout) -> Self {
        let exists = |configuration: BuildConfiguration| {
            component
                .project_output
                .as_deref()
                .is_some_and(|out| configuration.artifact(layout, out).is_file())
        };
        Self { debug: exists(BuildConfiguration::Debug), release: exists(BuildConfiguration::Release) }
    }

    pub fn has(&self, configuration: BuildConfiguration) -> bool {
        match configuration {
            BuildConfiguration::Debug => self.debug,
            BuildConfiguration::Release => self.release,
        }
    }

    pub fn any(&self) -> bool {
        self.debug || self.release
    }

    /// Action a build of `configuration` would perform.
    pub fn action(&self, configuration: BuildConfiguration) -> &'static str {
        if self.has(configuration) { "Rebuild" } else { "Build" }
    }

    /// Summary shown next to a plugin target.
    pub fn describe(&self) -> String {
        match (self.debug, self.release) {
            (true, true) => "built".to_string(),
            (false, false) => "Binaries for this platform have not been built".to_string(),
            (true, false) => "Only Debug configuration binary has been built".to_string(),
            (false, true) => "Only Release configuration binary has been built".to_string(),
        }
    }
}
