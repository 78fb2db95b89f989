//! SSH config loading and appending errors.

use std::{error::Error, fmt, io, path::PathBuf};

/// Step of an append that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    CreateDir,
    Open,
    Write,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStage::CreateDir => write!(f, "create directory"),
            WriteStage::Open => write!(f, "open"),
            WriteStage::Write => write!(f, "write"),
        }
    }
}

#[derive(Debug)]
pub enum SshConfigError {
    /// The root config file does not exist.
    NotFound(PathBuf),
    /// The root config file exists but could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// A read failed part way through a file.
    Scan { path: PathBuf, source: io::Error },
    /// No alias was given and none could be confirmed interactively.
    MissingAlias,
    /// The alias is already the primary pattern of a loaded entry.
    AliasExists(String),
    /// The `user@host` target has no host part.
    InvalidTarget(String),
    /// The alias is empty or contains whitespace.
    InvalidAlias(String),
    /// A field value would break the config line structure.
    InvalidValue { field: &'static str, value: String },
    Write { stage: WriteStage, path: PathBuf, source: io::Error },
}

impl fmt::Display for SshConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SshConfigError::NotFound(path) => write!(f, "SSH config not found: {}", path.display()),
            SshConfigError::Open { path, source } => write!(f, "Failed to open {}: {}", path.display(), source),
            SshConfigError::Scan { path, source } => write!(f, "Failed to read {}: {}", path.display(), source),
            SshConfigError::MissingAlias => write!(f, "No alias given for the new host"),
            SshConfigError::AliasExists(alias) => write!(f, "Host alias '{}' already exists", alias),
            SshConfigError::InvalidTarget(target) => write!(f, "Invalid target '{}': expected [user@]host", target),
            SshConfigError::InvalidAlias(alias) => write!(f, "Invalid alias '{}': must be a single non-empty word", alias),
            SshConfigError::InvalidValue { field, value } => write!(f, "Invalid {} value {:?}", field, value),
            SshConfigError::Write { stage, path, source } => {
                write!(f, "Failed to {} {}: {}", stage, path.display(), source)
            }
        }
    }
}

impl Error for SshConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SshConfigError::Open { source, .. } | SshConfigError::Scan { source, .. } | SshConfigError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
