//! User settings for sshm.

mod errors;
mod loader;
mod settings;

pub use errors::ConfigError;
pub use loader::{ConfigLoader, SSH_CONFIG_ENV, default_settings_path, resolve_ssh_config_path};
pub use settings::Settings;
