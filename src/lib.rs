pub mod cli;
pub mod config;
pub mod log;
pub mod search;
pub mod ssh_config;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(config::ConfigError),
    SshConfig(ssh_config::SshConfigError),
    Log(log::LogError),
    /// No SSH config path could be determined (no home directory).
    NoConfigPath,
    /// No loaded host has the requested alias.
    UnknownHost(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::SshConfig(err) => write!(f, "{}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
            Error::NoConfigPath => write!(f, "Could not determine the SSH config path; set SSH_CONFIG or pass --config"),
            Error::UnknownHost(alias) => write!(f, "No host named '{}'", alias),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<ssh_config::SshConfigError> for Error {
    fn from(err: ssh_config::SshConfigError) -> Self {
        Error::SshConfig(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}
