// ============================================================================
// src/main.rs – dockyard entrypoint (CLI parsing, logging, dispatch)
// ============================================================================

mod app;
mod cmd;
mod config;
mod error;
mod host;
mod menu;
mod prompt;
#[cfg(test)]
mod testutil;
mod ui;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use app::{Outcome, Session};
use cmd::{DryRunShell, Shell, SystemShell};
use config::Config;
use host::HostInfo;
use menu::MenuChoice;
use prompt::TerminalPrompter;
use ui::UX;
use util::audit::AuditLog;

#[derive(Parser, Debug)]
#[command(
    name = "dockyard",
    version,
    about = "Install or remove the Docker engine on Debian/Ubuntu hosts"
)]
struct Cli {
    /// Configuration file (.toml, otherwise YAML). Defaults to /etc/dockyard.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print commands instead of running them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add Docker's apt repository and install the engine
    Install,
    /// Purge Docker packages, data directories and leftovers
    Uninstall,
    /// Print the effective configuration as TOML
    PrintConfig,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let ui = UX::new(cli.quiet);

    match run(cli, &ui) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if !already_reported(&err) {
                ui.error(&format!("{err:#}"));
            }
            ExitCode::from(1)
        }
    }
}

/// The runner and the OS guard print their own errors.
fn already_reported(err: &anyhow::Error) -> bool {
    use error::DockyardError::*;
    matches!(
        err.downcast_ref::<error::DockyardError>(),
        Some(
            CommandFailed { .. }
                | Signalled { .. }
                | Spawn { .. }
                | UnsupportedPlatform(_)
        )
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, ui: &UX) -> Result<Option<Outcome>> {
    let cfg = Config::resolve(cli.config.as_deref()).context("load configuration")?;

    let preset = match cli.command {
        Some(Commands::PrintConfig) => {
            print!("{}", cfg.to_toml()?);
            return Ok(None);
        }
        Some(Commands::Install) => Some(MenuChoice::Install),
        Some(Commands::Uninstall) => Some(MenuChoice::Uninstall),
        None => None,
    };

    let host_info = HostInfo::probe()?;
    let distribution =
        host::resolve_distribution(&cfg.repo.distribution, host::read_os_release().as_deref());
    tracing::debug!(
        sysname = %host_info.sysname,
        release = %host_info.release,
        %distribution,
        "host probed"
    );

    let audit = if cli.dry_run {
        AuditLog::disabled()
    } else {
        AuditLog::new(cfg.audit.target())
    };

    let mut system;
    let mut dry;
    let shell: &mut dyn Shell = if cli.dry_run {
        dry = DryRunShell;
        &mut dry
    } else {
        system = SystemShell::discover()?;
        &mut system
    };
    let mut prompter = TerminalPrompter::new();

    ui.banner();
    let outcome = Session {
        ui,
        shell,
        prompter: &mut prompter,
        audit: &audit,
        host: host_info,
        cfg,
        distribution,
    }
    .run(preset)?;
    Ok(Some(outcome))
}
