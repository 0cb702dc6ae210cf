//! XML → descriptor mapping.

use tracing::warn;

use super::ComponentDescriptor;

/// Parse every `component` element of `source`, in document order.
///
/// Components without a non-empty `name` are skipped.
pub fn parse_components(source: &str) -> Result<Vec<ComponentDescriptor>, roxmltree::Error> {
    let doc = roxmltree::Document::parse(source)?;

    let components = doc
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("component"))
        .enumerate()
        .filter_map(|(index, node)| {
            let parsed = parse_component(&node);
            if parsed.is_none() {
                warn!(index, "component element without <name> rejected");
            }
            parsed
        })
        .collect();

    Ok(components)
}

fn parse_component(node: &roxmltree::Node) -> Option<ComponentDescriptor> {
    let name = find_child_text(node, "name")?;

    Some(ComponentDescriptor {
        name,
        env_var_name: find_child_text(node, "envVar"),
        mandatory: find_child_text(node, "mandatory").map(|v| parse_flag(&v)).unwrap_or(false),
        check_file: find_child_text(node, "checkFile"),
        project: find_child_text(node, "project"),
        project_output: find_child_text(node, "projectOutput"),
        target: find_child_text(node, "target"),
        target_property: find_child_text(node, "targetProperty"),
        info: find_child_text(node, "info"),
    })
}

/// Integer text where nonzero means true; anything unparsable is false.
fn parse_flag(value: &str) -> bool {
    value.parse::<i64>().map(|n| n != 0).unwrap_or(false)
}

/// Trimmed text of the first child element with the given tag, `None` when missing or blank.
fn find_child_text(parent: &roxmltree::Node, tag: &str) -> Option<String> {
    parent
        .children()
        .find(|c| c.is_element() && c.tag_name().name() == tag)
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}
