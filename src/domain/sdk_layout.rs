//! Fixed locations inside a Plugin-SDK checkout.

use std::path::{Path, PathBuf};

pub const DEFAULT_COMPONENTS_FILE: &str = "tools/Plugin-SDK_Wizard_Config.xml";
pub const DEFAULT_SOLUTION: &str = "plugin.sln";

/// Paths relative to a Plugin-SDK root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLayout {
    root: PathBuf,
}

impl SdkLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn solution(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn generate_dir(&self) -> PathBuf {
        self.root.join("tools").join("generate")
    }

    /// Script that writes the Visual Studio solution.
    pub fn generate_script(&self) -> PathBuf {
        self.generate_dir().join("Visual Studio.bat")
    }

    pub fn premake_dir(&self) -> PathBuf {
        self.root.join("tools").join("premake")
    }

    pub fn premake_executable(&self) -> PathBuf {
        let name = if cfg!(windows) { "premake5.exe" } else { "premake5" };
        self.premake_dir().join(name)
    }

    pub fn generated_plugins_dir(&self) -> PathBuf {
        self.root.join("tools").join("myplugin-gen").join("generated")
    }

    pub fn plugin_project_dir(&self, name: &str) -> PathBuf {
        self.generated_plugins_dir().join(name)
    }

    pub fn plugin_solution(&self, name: &str) -> PathBuf {
        self.plugin_project_dir(name).join(format!("{name}.sln"))
    }

    pub fn output_lib_dir(&self) -> PathBuf {
        self.root.join("output").join("lib")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_paths_nest_under_generator() {
        let layout = SdkLayout::new("sdk");
        assert_eq!(
            layout.plugin_solution("MyPlugin"),
            Path::new("sdk/tools/myplugin-gen/generated/MyPlugin/MyPlugin.sln")
        );
        assert_eq!(layout.generate_script(), Path::new("sdk/tools/generate/Visual Studio.bat"));
    }
}
