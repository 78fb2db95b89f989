//! Include expansion helpers for SSH config parsing.

use super::diagnostics::{LoadDiagnostics, LoadEvent, SkipReason};
use crate::log_debug;
use glob::{MatchOptions, Pattern, glob_with};
use std::path::{Path, PathBuf};

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// An `Include` pattern anchored to a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct IncludePattern {
    /// Glob string with the anchor directory escaped.
    pub(super) glob: String,
    /// Plain joined path, used for literal includes and reporting.
    pub(super) path: PathBuf,
    /// Whether the user-written part contains glob metacharacters.
    pub(super) has_meta: bool,
}

/// Resolve every pattern on an `Include` line to existing files, in order.
///
/// Unmatched or missing patterns are reported to `diagnostics` and skipped.
pub(super) fn resolve_include_fields(fields: &[String], base_dir: &Path, diagnostics: &mut LoadDiagnostics) -> Vec<PathBuf> {
    let mut resolved = Vec::new();
    for field in fields {
        let pattern = resolve_include_pattern(field, base_dir);
        match expand_include_pattern(&pattern) {
            Ok(paths) => resolved.extend(paths),
            Err(reason) => {
                log_debug!("Skipping SSH include pattern {:?}: {:?}", pattern.path, reason);
                diagnostics.push(LoadEvent::IncludeSkipped {
                    pattern: pattern.path.to_string_lossy().to_string(),
                    reason,
                });
            }
        }
    }
    resolved
}

/// Anchor `pattern` to `base_dir`, or to the home directory for `~/` patterns.
pub(super) fn resolve_include_pattern(pattern: &str, base_dir: &Path) -> IncludePattern {
    let (anchor, relative) = match pattern.strip_prefix("~/").zip(dirs::home_dir()) {
        Some((rest, home)) => (Some(home), rest),
        None if Path::new(pattern).is_absolute() => (None, pattern),
        None => (Some(base_dir.to_path_buf()), pattern),
    };
    let has_meta = has_glob_meta(relative);

    match anchor {
        Some(anchor) => IncludePattern {
            glob: Path::new(&Pattern::escape(&anchor.to_string_lossy()))
                .join(relative)
                .to_string_lossy()
                .to_string(),
            path: anchor.join(relative),
            has_meta,
        },
        None => IncludePattern {
            glob: relative.to_string(),
            path: PathBuf::from(relative),
            has_meta,
        },
    }
}

fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

pub(super) fn expand_include_pattern(pattern: &IncludePattern) -> Result<Vec<PathBuf>, SkipReason> {
    if !pattern.has_meta {
        return if pattern.path.is_file() { Ok(vec![pattern.path.clone()]) } else { Err(SkipReason::Missing) };
    }

    let files: Vec<PathBuf> = match glob_with(&pattern.glob, GLOB_OPTIONS) {
        Ok(paths) => paths.flatten().filter(|path| path.is_file()).collect(),
        Err(err) => return Err(SkipReason::InvalidPattern(err.msg.to_string())),
    };

    if files.is_empty() {
        return Err(SkipReason::NoMatch);
    }
    Ok(files)
}

#[cfg(test)]
#[path = "../test/ssh_config/include.rs"]
mod tests;
