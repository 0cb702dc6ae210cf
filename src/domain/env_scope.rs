use std::fmt;

/// Where an environment variable value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvScope {
    /// Current OS user, across all of their sessions.
    User,
    /// Every user on the host; writes need elevation.
    Machine,
    /// The running process only, discarded at exit.
    Process,
}

impl EnvScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvScope::User => "user",
            EnvScope::Machine => "machine",
            EnvScope::Process => "process",
        }
    }
}

impl fmt::Display for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a precedence write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Value persisted at this scope and mirrored into the process.
    Set(EnvScope),
    /// Variable removed at user, process, and machine scope.
    Cleared,
}

/// Strip surrounding whitespace and trailing path separators from a user-entered path.
pub fn normalize_path(path: &str) -> String {
    path.trim().trim_end_matches(['\\', '/']).to_string()
}
