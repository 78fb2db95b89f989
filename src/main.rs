use sshm::{
    Error, Result,
    cli::{self, CliCommand, LinePrompt},
    config::{self, ConfigLoader},
    log::LOGGER,
    log_debug, log_error, log_warn, search,
    ssh_config::{self, AliasPrompt, HostEntry, LoadDiagnostics},
};

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::main_args();

    let settings = match ConfigLoader::new().load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("❌ {}", err);
            return ExitCode::FAILURE;
        }
    };

    if args.debug || settings.debug_mode {
        LOGGER.enable_debug();
        log_debug!("Debug mode enabled");
    }

    let env_override = std::env::var(config::SSH_CONFIG_ENV).ok();
    let Some(config_path) = config::resolve_ssh_config_path(args.config_path.as_deref(), env_override.as_deref(), &settings) else {
        eprintln!("❌ {}", Error::NoConfigPath);
        return ExitCode::FAILURE;
    };
    log_debug!("Using SSH config: {}", config_path.display());

    let result = match args.command {
        CliCommand::List { query } => list_hosts(&config_path, query.as_deref().unwrap_or_default()),
        CliCommand::Show { alias } => show_host(&config_path, &alias),
        CliCommand::Add { target, options } => add_host(&config_path, &target, &options),
        CliCommand::Connect { alias } => connect(&config_path, &alias),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error!("{}", err);
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    };
    let _ = LOGGER.flush();
    exit_code
}

fn load_entries(config_path: &Path) -> Result<Vec<HostEntry>> {
    let mut diagnostics = LoadDiagnostics::new();
    let entries = ssh_config::load_config_with_diagnostics(config_path, &mut diagnostics)?;
    for (pattern, reason) in diagnostics.skipped_includes() {
        log_warn!("Include {:?} skipped: {:?}", pattern, reason);
    }
    log_debug!("Loaded {} hosts from {} file(s)", entries.len(), diagnostics.visited_files.len());
    Ok(entries)
}

fn find_entry(entries: Vec<HostEntry>, alias: &str) -> Result<HostEntry> {
    entries
        .into_iter()
        .find(|entry| entry.primary_alias() == Some(alias))
        .ok_or_else(|| Error::UnknownHost(alias.to_string()))
}

fn list_hosts(config_path: &Path, query: &str) -> Result<()> {
    let entries = load_entries(config_path)?;
    for entry in search::filter_entries(&entries, query) {
        let (primary, secondary) = entry.display_text();
        if secondary.is_empty() {
            println!("{}", primary);
        } else {
            println!("{}  ({})", primary, secondary);
        }
    }
    Ok(())
}

fn show_host(config_path: &Path, alias: &str) -> Result<()> {
    let entry = find_entry(load_entries(config_path)?, alias)?;
    println!("Host {}", entry.patterns.join(" "));
    for (directive, value) in entry.details() {
        println!("    {} {}", directive, value);
    }
    Ok(())
}

fn add_host(config_path: &Path, target: &str, options: &ssh_config::AddHostOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut prompt = LinePrompt::new(stdin.lock(), io::stderr());
    let prompt: Option<&mut dyn AliasPrompt> = if options.alias.is_none() && stdin.is_terminal() { Some(&mut prompt) } else { None };

    let entry = ssh_config::add_host(config_path, target, options, prompt)?;
    println!("Added host '{}' to {}", entry.primary_alias().unwrap_or_default(), config_path.display());
    Ok(())
}

fn connect(config_path: &Path, alias: &str) -> Result<()> {
    let entry = find_entry(load_entries(config_path)?, alias)?;
    let host = entry.primary_alias().unwrap_or_default().to_string();

    let mut command = std::process::Command::new("ssh");
    // Keep the chosen config file in effect for ssh itself.
    command.arg("-F").arg(config_path).arg(&host);
    log_debug!("Launching ssh for host '{}'", host);
    let _ = LOGGER.flush();
    launch(command)
}

#[cfg(unix)]
fn launch(mut command: std::process::Command) -> Result<()> {
    use std::os::unix::process::CommandExt;
    // exec only returns on failure.
    Err(Error::Io(command.exec()))
}

#[cfg(not(unix))]
fn launch(mut command: std::process::Command) -> Result<()> {
    let status = command.status()?;
    if !status.success() {
        log_warn!("ssh exited with {}", status);
    }
    Ok(())
}
