//! Component descriptors: one entry per configured SDK, game, or plugin target.

pub mod parse;

use serde::Serialize;

/// Environment variable that binds the Plugin-SDK root.
pub const PLUGIN_SDK_DIR: &str = "PLUGIN_SDK_DIR";

/// A single configured SDK/game/plugin-target entry.
///
/// `name` is always present. Each optional field enables an independent role:
/// environment binding, buildability, plugin-target and plugin-extension eligibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub env_var_name: Option<String>,
    pub mandatory: bool,
    pub check_file: Option<String>,
    pub project: Option<String>,
    pub project_output: Option<String>,
    pub target: Option<String>,
    pub target_property: Option<String>,
    pub info: Option<String>,
}

impl ComponentDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Bound to an OS environment variable.
    pub fn env_var(&self) -> Option<&str> {
        self.env_var_name.as_deref()
    }

    /// Produces a library through MSBuild.
    pub fn is_buildable(&self) -> bool {
        self.project.is_some() && self.project_output.is_some()
    }

    /// Selectable as a target game for a new plugin.
    pub fn is_plugin_target(&self) -> bool {
        self.target.is_some()
    }

    /// Selectable as an extension for a new plugin.
    pub fn is_plugin_extension(&self) -> bool {
        self.target_property.is_some()
    }

    /// Whether this descriptor binds the Plugin-SDK root variable.
    pub fn is_sdk_root(&self) -> bool {
        self.env_var() == Some(PLUGIN_SDK_DIR)
    }

    /// Case-insensitive match against the display name or any of the given flag values.
    pub fn matches(&self, query: &str, flag: Option<&str>) -> bool {
        self.name.eq_ignore_ascii_case(query) || flag.is_some_and(|f| f.eq_ignore_ascii_case(query))
    }
}

/// Pick the candidate whose name or `flag` value matches `query`, ignoring case.
///
/// A miss reports the candidate names.
pub fn find_component<'a, I, F>(
    candidates: I,
    query: &str,
    flag: F,
) -> Result<&'a ComponentDescriptor, crate::domain::AppError>
where
    I: IntoIterator<Item = &'a ComponentDescriptor>,
    F: Fn(&ComponentDescriptor) -> Option<&str>,
{
    let candidates: Vec<&ComponentDescriptor> = candidates.into_iter().collect();
    candidates.iter().copied().find(|&c| c.matches(query, flag(c))).ok_or_else(|| {
        crate::domain::AppError::UnknownComponent {
            name: query.to_string(),
            available: candidates.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", "),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> ComponentDescriptor {
        ComponentDescriptor {
            env_var_name: Some("GTA_SA_DIR".into()),
            project: Some("Plugin_SA".into()),
            project_output: Some("Plugin".into()),
            target: Some("gtasa".into()),
            ..ComponentDescriptor::new("GTA_San_Andreas")
        }
    }

    #[test]
    fn roles_follow_field_presence() {
        let plain = ComponentDescriptor::new("Docs");
        assert!(!plain.is_buildable());
        assert!(!plain.is_plugin_target());
        assert!(!plain.is_plugin_extension());
        assert!(plain.env_var().is_none());

        let g = game();
        assert!(g.is_buildable());
        assert!(g.is_plugin_target());
        assert!(!g.is_plugin_extension());
    }

    #[test]
    fn project_without_output_is_not_buildable() {
        let c = ComponentDescriptor { project: Some("Plugin_SA".into()), ..ComponentDescriptor::new("x") };
        assert!(!c.is_buildable());
    }

    #[test]
    fn matches_name_or_flag_ignoring_case() {
        let g = game();
        assert!(g.matches("gta_san_andreas", g.target.as_deref()));
        assert!(g.matches("GTASA", g.target.as_deref()));
        assert!(!g.matches("gta3", g.target.as_deref()));
    }

    #[test]
    fn find_component_by_name_or_flag() {
        let list = vec![game(), ComponentDescriptor::new("Core_SDK")];
        fn target(c: &ComponentDescriptor) -> Option<&str> {
            c.target.as_deref()
        }

        assert_eq!(find_component(&list, "GTASA", target).unwrap().name, "GTA_San_Andreas");
        assert_eq!(find_component(&list, "core_sdk", target).unwrap().name, "Core_SDK");

        let err = find_component(&list, "nope", target).unwrap_err();
        assert!(err.to_string().contains("GTA_San_Andreas, Core_SDK"));
    }
}
