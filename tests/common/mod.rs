//! Shared testing utilities for psdk-wizard CLI tests.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const COMPONENTS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<config>
  <component>
    <name>Plugin-SDK</name>
    <envVar>PLUGIN_SDK_DIR</envVar>
    <checkFile>premake5.lua</checkFile>
    <mandatory>1</mandatory>
  </component>
  <component>
    <name>GTA San Andreas</name>
    <envVar>GTA_SA_DIR</envVar>
    <checkFile>gta_sa.exe</checkFile>
    <project>Plugin_SA</project>
    <projectOutput>Plugin</projectOutput>
    <target>gtasa</target>
  </component>
  <component>
    <name>CLEO</name>
    <targetProperty>cleo</targetProperty>
    <info>https://cleo.li</info>
  </component>
</config>
"#;

/// Isolated SDK checkout with file-backed user and machine environment scopes.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    sdk_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// SDK directory containing the descriptor file and `premake5.lua`.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_sdk_file("tools/Plugin-SDK_Wizard_Config.xml", COMPONENTS_XML);
        ctx.write_sdk_file("premake5.lua", "");
        ctx
    }

    /// SDK directory without any file in it.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let sdk_dir = root.path().join("sdk");
        fs::create_dir_all(&sdk_dir).expect("Failed to create SDK directory");
        let sdk_dir = fs::canonicalize(&sdk_dir).expect("Failed to resolve SDK directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create home directory");
        Self { root, sdk_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn sdk_dir(&self) -> &Path {
        &self.sdk_dir
    }

    pub fn user_env_file(&self) -> PathBuf {
        self.root.path().join("env/user.toml")
    }

    pub fn machine_env_file(&self) -> PathBuf {
        self.root.path().join("env/machine.toml")
    }

    /// Build a command for the compiled binary, run from the SDK directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("psdk-wizard").expect("Failed to locate psdk-wizard binary");
        cmd.current_dir(&self.sdk_dir)
            .env("HOME", self.root.path().join("home"))
            .env("PSDK_WIZARD_USER_ENV", self.user_env_file())
            .env("PSDK_WIZARD_MACHINE_ENV", self.machine_env_file())
            .env_remove("PUBLIC")
            .env_remove("APPDATA")
            .env_remove("PSDK_WIZARD_LOG");
        cmd
    }

    pub fn write_sdk_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.sdk_dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn set_user(&self, name: &str, value: &str) {
        write_scope(&self.user_env_file(), name, value);
    }

    pub fn set_machine(&self, name: &str, value: &str) {
        write_scope(&self.machine_env_file(), name, value);
    }

    pub fn user_scope(&self) -> BTreeMap<String, String> {
        read_scope(&self.user_env_file())
    }

    pub fn machine_scope(&self) -> BTreeMap<String, String> {
        read_scope(&self.machine_env_file())
    }

    /// Game directory with its check file, outside the SDK.
    pub fn game_dir(&self) -> PathBuf {
        let dir = self.root.path().join("games/San Andreas");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("gta_sa.exe"), b"").unwrap();
        dir
    }
}

fn read_scope(path: &Path) -> BTreeMap<String, String> {
    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap(),
        Err(_) => BTreeMap::new(),
    }
}

fn write_scope(path: &Path, name: &str, value: &str) {
    let mut table = read_scope(path);
    table.insert(name.to_string(), value.to_string());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, toml::to_string(&table).unwrap()).unwrap();
}

/// Minimal shortcut file whose location info holds `target` as the local base path.
#[allow(dead_code)]
pub fn shortcut_bytes(target: &str) -> Vec<u8> {
    const HEADER_SIZE: u32 = 0x4C;
    const LINK_INFO_HEADER_SIZE: u32 = 0x1C;

    let mut bytes = vec![0u8; HEADER_SIZE as usize];
    bytes[..4].copy_from_slice(&HEADER_SIZE.to_le_bytes());
    bytes[0x14..0x18].copy_from_slice(&0x2u32.to_le_bytes());

    let total = LINK_INFO_HEADER_SIZE + target.len() as u32 + 2;
    for field in [total, LINK_INFO_HEADER_SIZE, 0x1, 0x1C, LINK_INFO_HEADER_SIZE, 0, total - 1] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.extend_from_slice(target.as_bytes());
    bytes.extend_from_slice(&[0, 0]);
    bytes
}
