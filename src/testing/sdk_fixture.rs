use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{FakeShortcuts, FakeToolRunner, MemoryEnvStore};
use crate::app::AppContext;
use crate::app::config::WizardSettings;
use crate::domain::{ComponentDescriptor, EnvScope, PLUGIN_SDK_DIR};

pub type TestContext = AppContext<MemoryEnvStore, FakeToolRunner, FakeShortcuts>;

/// Temporary SDK checkout that doubles as the wizard directory.
pub struct SdkFixture {
    dir: TempDir,
}

impl SdkFixture {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_string(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// Create an empty file (and its parents) relative to the SDK root.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(&path, b"").expect("write file");
        path
    }

    /// Machine-scope `PLUGIN_SDK_DIR` pointing at this fixture.
    pub fn env(&self) -> MemoryEnvStore {
        MemoryEnvStore::new().with(EnvScope::Machine, PLUGIN_SDK_DIR, &self.path_string())
    }

    pub fn context(&self, env: MemoryEnvStore, tools: FakeToolRunner) -> TestContext {
        self.context_with(env, tools, FakeShortcuts::default(), WizardSettings::default())
    }

    pub fn context_with(
        &self,
        env: MemoryEnvStore,
        tools: FakeToolRunner,
        shortcuts: FakeShortcuts,
        settings: WizardSettings,
    ) -> TestContext {
        AppContext::new(env, tools, shortcuts, settings, self.path(), sample_components())
    }
}

/// SDK root, two games, and one extension, shaped like the shipped descriptor file.
pub fn sample_components() -> Vec<ComponentDescriptor> {
    vec![
        ComponentDescriptor {
            env_var_name: Some(PLUGIN_SDK_DIR.into()),
            check_file: Some("premake5.lua".into()),
            mandatory: true,
            ..ComponentDescriptor::new("Plugin-SDK")
        },
        ComponentDescriptor {
            env_var_name: Some("GTA_SA_DIR".into()),
            check_file: Some("gta_sa.exe".into()),
            project: Some("Plugin_SA".into()),
            project_output: Some("Plugin".into()),
            target: Some("gtasa".into()),
            ..ComponentDescriptor::new("GTA San Andreas")
        },
        ComponentDescriptor {
            env_var_name: Some("GTA_VC_DIR".into()),
            check_file: Some("gta-vc.exe".into()),
            project: Some("Plugin_VC".into()),
            project_output: Some("Plugin_vc".into()),
            target: Some("gtavc".into()),
            ..ComponentDescriptor::new("GTA Vice City")
        },
        ComponentDescriptor {
            target_property: Some("cleo".into()),
            info: Some("https://cleo.li".into()),
            ..ComponentDescriptor::new("CLEO")
        },
    ]
}
