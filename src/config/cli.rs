//! Command-line argument definitions for dockmachine.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};

use crate::environment::DockerType;

/// Command-line interface for dockmachine.
#[derive(Debug, Parser)]
#[command(name = "dockmachine")]
#[command(
    author,
    version,
    about = "Resolve the docker-compose environment for a local or remote Docker daemon"
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Connection mode of the local machine (detected when omitted).
    #[arg(long, global = true, value_enum)]
    pub docker_type: Option<DockerType>,

    /// Address of the remote daemon.
    #[arg(long, global = true)]
    pub docker_host: Option<String>,

    /// Directory holding the TLS client certificates of the remote daemon.
    #[arg(long, global = true)]
    pub tls_cert_path: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the daemon configured in the current environment.
    Local(EnvArgs),

    /// Resolve a remote daemon from `--docker-host` and `--tls-cert-path`.
    Remote(EnvArgs),
}

/// Arguments shared by the `local` and `remote` subcommands.
#[derive(Debug, Default, Parser)]
pub struct EnvArgs {
    /// Additional variable for the launched process, as `KEY=VALUE`.
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub env: Vec<(String, String)>,

    /// Print only the resolved host IP.
    #[arg(long)]
    pub ip_only: bool,
}

/// Parses a `KEY=VALUE` pair; the value may itself contain `=`.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
