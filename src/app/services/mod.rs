pub mod environment;

pub use environment::EnvironmentVariableStore;
