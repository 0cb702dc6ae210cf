mod env_scope_store;
mod shortcut_source;
mod tool_runner;

pub use env_scope_store::EnvScopeStore;
pub use shortcut_source::ShortcutSource;
pub use tool_runner::{CapturedOutput, ToolInvocation, ToolRunner};
