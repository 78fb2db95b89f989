//! Settings file loading and SSH config path resolution
//!
//! The settings file is optional: a missing file yields defaults, while an
//! unreadable or malformed one is an error so a typo is not silently ignored.

use super::errors::ConfigError;
use super::settings::Settings;
use crate::ssh_config::get_default_ssh_config_path;
use crate::ssh_config::path::expand_tilde;
use crate::{log_debug, log_info};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Environment variable overriding the SSH config location.
pub const SSH_CONFIG_ENV: &str = "SSH_CONFIG";

pub struct ConfigLoader {
    settings_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            settings_path: default_settings_path(),
        }
    }

    pub fn with_path(settings_path: PathBuf) -> Self {
        Self {
            settings_path: Some(settings_path),
        }
    }

    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        let Some(settings_path) = &self.settings_path else {
            log_debug!("No home directory; using default settings");
            return Ok(Settings::default());
        };

        let content = match fs::read_to_string(settings_path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log_debug!("No settings file at {:?}; using defaults", settings_path);
                return Ok(Settings::default());
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings = serde_yml::from_str::<Settings>(&content).map_err(|err| ConfigError::ParseError(format!("{}: {}", settings_path.display(), err)))?;
        log_info!("Loaded settings from {:?}", settings_path);
        Ok(settings)
    }
}

/// `~/.sshm/settings.yaml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sshm").join("settings.yaml"))
}

/// Pick the SSH config file to work on.
///
/// Precedence: command line, then the `SSH_CONFIG` environment value, then the
/// settings file, then `~/.ssh/config`. Blank values are skipped.
pub fn resolve_ssh_config_path(cli_override: Option<&Path>, env_value: Option<&str>, settings: &Settings) -> Option<PathBuf> {
    if let Some(path) = cli_override {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.map(str::trim).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(expand_tilde(value)));
    }
    if let Some(value) = settings.ssh_config.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(expand_tilde(value)));
    }
    get_default_ssh_config_path()
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
