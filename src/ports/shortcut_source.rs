/// Port listing the targets of the user's shortcuts.
pub trait ShortcutSource {
    /// Resolved target paths; unreadable shortcuts are left out.
    fn targets(&self) -> Vec<String>;
}
