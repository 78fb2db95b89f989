use crate::ssh_config::AddHostOptions;
use crate::ssh_config::values::parse_bool;
use clap::{Arg, ArgMatches, Command, value_parser};

pub fn add_args() -> Command {
    Command::new("add")
        .about("Append a new Host entry to the SSH config")
        .arg(Arg::new("target").help("Connection target as [user@]host").required(true))
        .arg(
            Arg::new("alias")
                .short('a')
                .long("alias")
                .help("Host alias to write (prompted for when omitted on a terminal)"),
        )
        .arg(Arg::new("port").short('p').long("port").help("Port"))
        .arg(Arg::new("identity_file").short('i').long("identity-file").help("IdentityFile path"))
        .arg(Arg::new("proxy_jump").short('J').long("proxy-jump").help("ProxyJump host"))
        .arg(
            Arg::new("forward_agent")
                .long("forward-agent")
                .value_name("yes|no")
                .help("ForwardAgent setting")
                .value_parser(parse_yes_no),
        )
        .arg(
            Arg::new("identities_only")
                .long("identities-only")
                .value_name("yes|no")
                .help("IdentitiesOnly setting")
                .value_parser(parse_yes_no),
        )
        .arg(
            Arg::new("server_alive_interval")
                .long("server-alive-interval")
                .value_name("SECONDS")
                .help("ServerAliveInterval setting")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("server_alive_count_max")
                .long("server-alive-count-max")
                .value_name("COUNT")
                .help("ServerAliveCountMax setting")
                .value_parser(value_parser!(i64)),
        )
}

fn parse_yes_no(value: &str) -> Result<bool, String> {
    parse_bool(value).ok_or_else(|| format!("expected yes/no/true/false/1/0, got '{}'", value))
}

/// Returns the target spec and the options for an `add` invocation.
pub fn parse_add_subcommand(matches: &ArgMatches) -> (String, AddHostOptions) {
    let text = |id: &str| matches.get_one::<String>(id).cloned();

    let options = AddHostOptions {
        alias: text("alias"),
        port: text("port"),
        identity_file: text("identity_file"),
        proxy_jump: text("proxy_jump"),
        forward_agent: matches.get_one::<bool>("forward_agent").copied(),
        identities_only: matches.get_one::<bool>("identities_only").copied(),
        server_alive_interval: matches.get_one::<i64>("server_alive_interval").copied(),
        server_alive_count_max: matches.get_one::<i64>("server_alive_count_max").copied(),
    };

    (text("target").unwrap_or_default(), options)
}
