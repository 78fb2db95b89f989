//! Non-fatal findings collected while loading a config tree.

use std::path::PathBuf;

/// Why an `Include` pattern contributed no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Glob pattern matched nothing.
    NoMatch,
    /// Literal path (no glob metacharacters) does not exist or is not a file.
    Missing,
    /// Pattern could not be compiled as a glob.
    InvalidPattern(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    IncludeSkipped { pattern: String, reason: SkipReason },
    /// File was reached again through another include and not re-read.
    AlreadyVisited(PathBuf),
}

/// Collector handed to [`load_config_with_diagnostics`](super::load_config_with_diagnostics).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadDiagnostics {
    /// Canonical paths of every file read, in traversal order.
    pub visited_files: Vec<PathBuf>,
    pub events: Vec<LoadEvent>,
}

impl LoadDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: LoadEvent) {
        self.events.push(event);
    }

    /// Include patterns that were dropped, with the reason.
    pub fn skipped_includes(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.events.iter().filter_map(|event| match event {
            LoadEvent::IncludeSkipped { pattern, reason } => Some((pattern.as_str(), reason)),
            LoadEvent::AlreadyVisited(_) => None,
        })
    }
}
