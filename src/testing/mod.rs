mod fake_shortcuts;
mod fake_tool_runner;
mod lnk_builder;
mod memory_env_store;
mod sdk_fixture;

pub use fake_shortcuts::FakeShortcuts;
pub use fake_tool_runner::FakeToolRunner;
pub use lnk_builder::LnkBuilder;
pub use memory_env_store::MemoryEnvStore;
pub use sdk_fixture::{SdkFixture, TestContext, sample_components};
