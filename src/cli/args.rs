use super::add_args::{add_args, parse_add_subcommand};
use crate::ssh_config::AddHostOptions;
use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List hosts, optionally filtered by a fuzzy query.
    List { query: Option<String> },
    /// Show every set field of one host.
    Show { alias: String },
    /// Append a new host block.
    Add { target: String, options: AddHostOptions },
    /// Hand a host's alias to `ssh`.
    Connect { alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub debug: bool,
    pub config_path: Option<PathBuf>,
    pub command: CliCommand,
}

pub fn build_cli_command() -> Command {
    Command::new("sshm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse, search and extend the hosts in your SSH config.")
        .propagate_version(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("SSH config file to use (overrides SSH_CONFIG)")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(
            Command::new("list")
                .about("List hosts, optionally filtered by a fuzzy query")
                .arg(Arg::new("query").help("Characters that must appear in order").num_args(1..)),
        )
        .subcommand(
            Command::new("show")
                .about("Show the settings of one host")
                .arg(Arg::new("alias").help("Host alias").required(true)),
        )
        .subcommand(add_args())
        .subcommand(
            Command::new("connect")
                .about("Connect to a host with ssh")
                .arg(Arg::new("alias").help("Host alias").required(true)),
        )
}

/// Parses command-line arguments, exiting with clap's message on invalid input.
pub fn main_args() -> CliArgs {
    let cmd = build_cli_command();
    parse_main_args_from(&cmd, std::env::args_os()).unwrap_or_else(|err| err.exit())
}

pub fn parse_main_args_from<I, T>(cmd: &Command, args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().try_get_matches_from(args)?;

    Ok(CliArgs {
        debug: matches.get_flag("debug"),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        command: parse_command(&matches),
    })
}

fn parse_command(matches: &ArgMatches) -> CliCommand {
    let required = |sub: &ArgMatches, id: &str| sub.get_one::<String>(id).cloned().unwrap_or_default();

    match matches.subcommand() {
        Some(("show", sub)) => CliCommand::Show {
            alias: required(sub, "alias"),
        },
        Some(("add", sub)) => {
            let (target, options) = parse_add_subcommand(sub);
            CliCommand::Add { target, options }
        }
        Some(("connect", sub)) => CliCommand::Connect {
            alias: required(sub, "alias"),
        },
        Some(("list", sub)) => CliCommand::List {
            query: sub.get_many::<String>("query").map(|words| words.cloned().collect::<Vec<_>>().join(" ")),
        },
        _ => CliCommand::List { query: None },
    }
}

#[cfg(test)]
#[path = "../test/args.rs"]
mod tests;
