//! Orchestration API for dockmachine commands.
//!
//! These functions turn a loaded [`AppConfig`] into a resolved
//! [`DockerMachine`] and render the result for a shell. They hold the logic
//! behind the `local` and `remote` subcommands so that library embedders get
//! the same behaviour as the CLI.
//!
//! All functions accept library-owned types (not clap types) and return
//! [`crate::error::Result`]. They do not print to stdout/stderr or call
//! `std::process::exit`.


use tracing::info;

use crate::config::AppConfig;
use crate::environment::{EnvironmentMap, VariableNames, merge};
use crate::error::{ConfigError, Result};
use crate::machine::{DockerMachine, LocalBuilder, RemoteBuilder};

/// Combines the configured additional environment with per-invocation
/// additions. Per-invocation values win on collision.
#[must_use]
pub fn additional_environment<I>(config: &AppConfig, overrides: I) -> EnvironmentMap
where
    I: IntoIterator<Item = (String, String)>,
{
    let invocation: EnvironmentMap = overrides.into_iter().collect();
    merge(&config.environment, &invocation)
}

/// Resolves the daemon described by `system_environment`.
///
/// The CLI passes [`crate::environment::process_environment`]. The connection
/// mode comes from `config.docker_type` when set and is otherwise detected
/// from the snapshot.
///
/// # Errors
///
/// Returns a validation or resolution error when the environment does not
/// describe a usable daemon for the selected mode, and
/// [`ConfigError::InvalidValue`] when the configured variable names are blank
/// or collide.
pub fn resolve_local<I>(
    config: &AppConfig,
    system_environment: I,
    additions: EnvironmentMap,
) -> Result<DockerMachine>
where
    I: IntoIterator<Item = (String, String)>,
{
    let builder = LocalBuilder::from_env(
        system_environment,
        config.docker_type,
        config.variables.clone(),
    );
    info!(docker_type = %builder.docker_type(), "resolving local docker machine");
    builder.with_environment(additions).build()
}

/// Resolves the remote daemon described by `config`.
///
/// TLS is enabled when `config.tls_cert_path` is set.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] when no `docker_host` is
/// configured, and a validation or resolution error when the address or
/// additions are unusable.
pub fn resolve_remote(config: &AppConfig, additions: EnvironmentMap) -> Result<DockerMachine> {
    let host = config
        .docker_host
        .as_deref()
        .ok_or_else(|| ConfigError::MissingRequired {
            field: String::from("docker_host"),
        })?;

    let base = RemoteBuilder::new()
        .with_variable_names(config.variables.clone())
        .host(host);
    let builder = match config.tls_cert_path.as_deref() {
        Some(cert_path) => base.with_tls(cert_path),
        None => base,
    };

    info!(host, tls = config.tls_cert_path.is_some(), "resolving remote docker machine");
    builder.with_environment(additions).build()
}

/// Renders `export` lines for the connection variables and `additions` held
/// by `machine`.
///
/// Unrelated variables inherited from the process environment are left out.
/// Values are single-quoted for POSIX shells. Lines are ordered by key.
#[must_use]
pub fn render_exports(
    machine: &DockerMachine,
    names: &VariableNames,
    additions: &EnvironmentMap,
) -> String {
    let connection_names = names.all();
    machine
        .environment()
        .iter()
        .filter(|(key, _)| {
            connection_names.contains(&key.as_str()) || additions.contains_key(key.as_str())
        })
        .map(|(key, value)| format!("export {key}={}\n", shell_quote(value)))
        .collect()
}

/// Wraps `value` in single quotes, escaping embedded quotes as `'\''`.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
