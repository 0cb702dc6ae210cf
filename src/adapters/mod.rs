pub mod command_runner;
pub mod env;
pub mod shortcut_dirs;

pub use command_runner::CommandToolRunner;
pub use env::{FileEnvStore, HostEnvStore};
pub use shortcut_dirs::ShortcutDirectories;
