//! SSH config parsing, include-tree loading and host appending.

mod diagnostics;
mod errors;
mod include;
mod model;
mod parser;
pub(crate) mod path;
mod scanner;
pub(crate) mod values;
mod writer;

pub use diagnostics::{LoadDiagnostics, LoadEvent, SkipReason};
pub use errors::{SshConfigError, WriteStage};
pub use model::{HostEntry, UNNAMED_HOST};
pub use parser::parse_config_str;
pub use path::get_default_ssh_config_path;
pub use writer::{AddHostOptions, AliasPrompt, Target, add_host};

use std::path::Path;

/// Load every `Host` entry from `config_path` and the files it includes.
///
/// Only a missing or unopenable root file, or a read error, is fatal. Entries
/// come back in the order their `Host` lines were encountered.
pub fn load_config(config_path: &Path) -> Result<Vec<HostEntry>, SshConfigError> {
    let mut diagnostics = LoadDiagnostics::new();
    load_config_with_diagnostics(config_path, &mut diagnostics)
}

/// Same as [`load_config`], recording skipped includes and visited files in `diagnostics`.
pub fn load_config_with_diagnostics(config_path: &Path, diagnostics: &mut LoadDiagnostics) -> Result<Vec<HostEntry>, SshConfigError> {
    parser::load_tree(config_path, diagnostics)
}
