//! Appending new `Host` blocks to an SSH config file.
//!
//! Existing content is never parsed for rewriting: the new block is appended in
//! a single write after checking the alias against every loaded entry,
//! includes included.

use super::errors::{SshConfigError, WriteStage};
use super::load_config;
use super::model::HostEntry;
use crate::{log_debug, log_error, log_info};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

#[cfg(unix)]
const NEW_CONFIG_FILE_MODE: u32 = 0o600;

/// Indentation used for directives inside a written `Host` block.
const BLOCK_INDENT: &str = "    ";

/// Optional fields for a new host. `None` leaves the directive out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddHostOptions {
    pub alias: Option<String>,
    pub port: Option<String>,
    pub identity_file: Option<String>,
    pub proxy_jump: Option<String>,
    pub forward_agent: Option<bool>,
    pub identities_only: Option<bool>,
    pub server_alive_interval: Option<i64>,
    pub server_alive_count_max: Option<i64>,
}

/// Interactive confirmation of the alias for a new host.
pub trait AliasPrompt {
    /// Offer `default_alias` to the user. Returns the alias to use, or `None` if declined.
    fn confirm_alias(&mut self, default_alias: &str) -> Option<String>;
}

/// A `[user@]host` connection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub user: Option<String>,
    pub host: String,
}

impl Target {
    /// Split on the first `@`. An empty user part counts as no user.
    pub fn parse(spec: &str) -> Result<Self, SshConfigError> {
        let spec = spec.trim();
        let (user, host) = match spec.split_once('@') {
            Some((user, host)) => (Some(user).filter(|user| !user.is_empty()), host),
            None => (None, spec),
        };

        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(SshConfigError::InvalidTarget(spec.to_string()));
        }
        if let Some(user) = user
            && user.chars().any(char::is_whitespace)
        {
            return Err(SshConfigError::InvalidTarget(spec.to_string()));
        }

        Ok(Self {
            user: user.map(str::to_string),
            host: host.to_string(),
        })
    }

    /// `user@host` when a user is present, otherwise `host`.
    pub fn default_alias(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }
}

/// Append a new `Host` block for `target_spec` to `config_path`.
///
/// Without an explicit alias the default one is offered to `prompt`; with no
/// prompt available this fails with [`SshConfigError::MissingAlias`]. Nothing is
/// written unless every check passes.
pub fn add_host(config_path: &Path, target_spec: &str, options: &AddHostOptions, prompt: Option<&mut dyn AliasPrompt>) -> Result<HostEntry, SshConfigError> {
    let target = Target::parse(target_spec)?;
    validate_options(options)?;

    let alias = resolve_alias(&target, options, prompt)?;
    validate_alias(&alias)?;
    ensure_alias_available(config_path, &alias)?;

    let entry = build_entry(alias, target, options);
    append_block(config_path, &render_host_block(&entry))?;
    log_info!("Appended host '{}' to {}", entry.patterns.join(" "), config_path.display());

    Ok(entry)
}

fn resolve_alias(target: &Target, options: &AddHostOptions, prompt: Option<&mut dyn AliasPrompt>) -> Result<String, SshConfigError> {
    if let Some(alias) = options.alias.as_deref() {
        return Ok(alias.trim().to_string());
    }

    let default_alias = target.default_alias();
    let Some(prompt) = prompt else {
        return Err(SshConfigError::MissingAlias);
    };
    prompt
        .confirm_alias(&default_alias)
        .map(|alias| alias.trim().to_string())
        .ok_or(SshConfigError::MissingAlias)
}

fn validate_alias(alias: &str) -> Result<(), SshConfigError> {
    if alias.is_empty() || alias.chars().any(char::is_whitespace) {
        return Err(SshConfigError::InvalidAlias(alias.to_string()));
    }
    Ok(())
}

fn validate_options(options: &AddHostOptions) -> Result<(), SshConfigError> {
    let text_fields = [
        ("Port", &options.port),
        ("IdentityFile", &options.identity_file),
        ("ProxyJump", &options.proxy_jump),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value
            && value.contains(['\n', '\r'])
        {
            return Err(SshConfigError::InvalidValue {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Fail if `alias` is already the primary pattern of any entry in the resolved config.
fn ensure_alias_available(config_path: &Path, alias: &str) -> Result<(), SshConfigError> {
    let entries = match load_config(config_path) {
        Ok(entries) => entries,
        Err(SshConfigError::NotFound(_)) => {
            log_debug!("SSH config {} does not exist yet; no aliases to compare", config_path.display());
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    if entries.iter().any(|entry| entry.primary_alias() == Some(alias)) {
        return Err(SshConfigError::AliasExists(alias.to_string()));
    }
    Ok(())
}

fn build_entry(alias: String, target: Target, options: &AddHostOptions) -> HostEntry {
    HostEntry {
        patterns: vec![alias],
        host_name: Some(target.host),
        user: target.user,
        port: non_blank(&options.port),
        identity_file: non_blank(&options.identity_file),
        proxy_jump: non_blank(&options.proxy_jump),
        server_alive_interval: options.server_alive_interval,
        server_alive_count_max: options.server_alive_count_max,
        forward_agent: options.forward_agent,
        identities_only: options.identities_only,
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty()).map(str::to_string)
}

/// Render `entry` as a config block, preceded by a blank line.
pub(crate) fn render_host_block(entry: &HostEntry) -> String {
    let mut block = format!("\nHost {}\n", entry.patterns.join(" "));
    for (directive, value) in entry.details() {
        block.push_str(&format!("{}{} {}\n", BLOCK_INDENT, directive, value));
    }
    block
}

fn append_block(config_path: &Path, block: &str) -> Result<(), SshConfigError> {
    let write_error = |stage, source| SshConfigError::Write {
        stage,
        path: config_path.to_path_buf(),
        source,
    };

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| write_error(WriteStage::CreateDir, err))?;
    }

    let mut file = open_append(config_path).map_err(|err| write_error(WriteStage::Open, err))?;
    write_or_roll_back(&mut file, config_path, block).map_err(|err| write_error(WriteStage::Write, err))
}

/// Append `block` to `file`, cutting the file back to its previous length if the write fails.
pub(crate) fn write_or_roll_back(file: &mut File, path: &Path, block: &str) -> std::io::Result<()> {
    let original_len = file.metadata().map(|metadata| metadata.len());
    let written = file.write_all(block.as_bytes()).and_then(|()| file.sync_all());

    if let Err(err) = &written {
        let rolled_back = original_len.and_then(|len| file.set_len(len));
        if let Err(rollback_err) = rolled_back {
            log_error!("Append to {} failed ({}) and the file could not be restored: {}", path.display(), err, rollback_err);
        }
    }
    written
}

fn open_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(NEW_CONFIG_FILE_MODE);
    }
    options.open(path)
}

#[cfg(test)]
#[path = "../test/ssh_config/writer.rs"]
mod tests;
