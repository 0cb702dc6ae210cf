//! Guessing installation directories from shortcut targets.

/// Directory of the last target ending in `check_file` at a path-component boundary.
///
/// Matching ignores case; the returned prefix keeps its trailing separator.
pub fn match_check_file<'a, I>(targets: I, check_file: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    if check_file.is_empty() {
        return None;
    }

    targets
        .into_iter()
        .filter_map(|target| {
            let dir = strip_suffix_ignore_case(target, check_file)?;
            let boundary = dir.is_empty() || dir.ends_with(['\\', '/']);
            boundary.then(|| dir.to_string())
        })
        .last()
}

/// Case-insensitive `strip_suffix`, compared one character at a time.
fn strip_suffix_ignore_case<'t>(target: &'t str, suffix: &str) -> Option<&'t str> {
    let mut rest = target;
    for expected in suffix.chars().rev() {
        let actual = rest.chars().next_back()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = &rest[..rest.len() - actual.len_utf8()];
    }
    Some(rest)
}
