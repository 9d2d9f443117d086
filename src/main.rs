//! `dockmachine` application entry point.
//!
//! This binary resolves the Docker connection for a local or remote daemon and
//! prints the environment a `docker-compose` process needs. It uses `eyre` for
//! opaque error handling at the application boundary, converting
//! domain-specific errors into human-readable reports.
//!
//! Configuration is loaded with layered precedence via `OrthoConfig`:
//! 1. Application defaults
//! 2. Configuration file (`~/.config/dockmachine/config.toml` or path from `DOCKMACHINE_CONFIG_PATH`)
//! 3. Environment variables (`DOCKMACHINE_*`)
//! 4. Command-line arguments

use clap::Parser;
use dockmachine::api::{additional_environment, render_exports, resolve_local, resolve_remote};
use dockmachine::config::{AppConfig, Cli, Commands, load_config};
use dockmachine::environment::process_environment;
use dockmachine::error::Result as DockMachineResult;
use eyre::{Report, Result as EyreResult};
use mockable::DefaultEnv;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Application entry point.
///
/// Initializes logging, loads configuration with layered precedence via
/// `OrthoConfig`, then dispatches to the appropriate subcommand handler.
fn main() -> EyreResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed command line");

    let env = DefaultEnv::new();
    let config = load_config(&cli, &env).map_err(Report::from)?;

    let output = run(&cli, &config)
        .inspect_err(|error| warn!(%error, "docker machine resolution failed"))
        .map_err(Report::from)?;
    emit(&output);
    Ok(())
}

/// Installs a stderr subscriber. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Execute the CLI command, returning domain-specific errors.
///
/// Keeps semantic errors inside the run loop so the CLI boundary owns
/// conversion to `eyre::Report`.
fn run(cli: &Cli, config: &AppConfig) -> DockMachineResult<String> {
    let (Commands::Local(args) | Commands::Remote(args)) = &cli.command;
    let additions = additional_environment(config, args.env.iter().cloned());

    let machine = match &cli.command {
        Commands::Local(_) => resolve_local(config, process_environment(), additions.clone())?,
        Commands::Remote(_) => resolve_remote(config, additions.clone())?,
    };

    if args.ip_only {
        Ok(format!("{}\n", machine.ip()))
    } else {
        Ok(render_exports(&machine, &config.variables, &additions))
    }
}

/// Writes command output to stdout.
#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn emit(output: &str) {
    print!("{output}");
}
