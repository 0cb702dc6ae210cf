pub mod build;
pub mod components;
pub mod detection;
pub mod env_scope;
pub mod error;
pub mod path_status;
pub mod plugin_name;
pub mod sdk_layout;
pub mod shortcut;

pub use build::{BuildConfiguration, BuiltState};
pub use components::{ComponentDescriptor, PLUGIN_SDK_DIR};
pub use env_scope::{EnvScope, WriteOutcome, normalize_path};
pub use error::AppError;
pub use path_status::{PathStatus, StatusLevel};
pub use plugin_name::PluginName;
pub use sdk_layout::SdkLayout;
