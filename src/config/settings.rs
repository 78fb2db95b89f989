use serde::Deserialize;

/// User settings read from `~/.sshm/settings.yaml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Write debug logs without passing `--debug`.
    pub debug_mode: bool,
    /// SSH config to use instead of `~/.ssh/config`.
    pub ssh_config: Option<String>,
}
