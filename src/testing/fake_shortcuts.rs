use crate::ports::ShortcutSource;

/// Fixed list of shortcut targets.
#[derive(Default)]
pub struct FakeShortcuts(pub Vec<String>);

impl FakeShortcuts {
    pub fn new(targets: &[&str]) -> Self {
        Self(targets.iter().map(|t| t.to_string()).collect())
    }
}

impl ShortcutSource for FakeShortcuts {
    fn targets(&self) -> Vec<String> {
        self.0.clone()
    }
}
