//! Configuration loading with layered precedence.
//!
//! This module loads configuration with the precedence order (lowest to
//! highest): application defaults, configuration file, environment variables,
//! command-line arguments.
//!
//! Layers are composed manually with `MergeComposer` rather than through the
//! derived `load()`, because the `Cli` struct owns subcommand dispatch and the
//! `--config` flag, and because typed environment values must fail fast
//! instead of being silently ignored.
//!
//! # Environment Variable Handling
//!
//! String fields (e.g., `DOCKMACHINE_DOCKER_HOST`) are always accepted. The
//! typed `DOCKMACHINE_DOCKER_TYPE` must be `daemon` or `remote`; any other
//! value returns an error immediately.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use clap::ValueEnum;
use ortho_config::discovery::ConfigDiscovery;
use ortho_config::serde_json::{self, Map, Value};
use ortho_config::{MergeComposer, toml};
use tracing::debug;

use crate::config::{AppConfig, Cli};
use crate::environment::DockerType;
use crate::error::{ConfigError, Result};

// ============================================================================
// Environment Variable Specification Table
// ============================================================================

/// The type of value expected from an environment variable.
#[derive(Clone, Copy)]
enum EnvVarType {
    /// String value (always accepted).
    String,
    /// A [`DockerType`] name. Invalid values return an error.
    DockerType,
}

/// Specification for a single environment variable mapping.
struct EnvVarSpec {
    /// The environment variable name (e.g., `DOCKMACHINE_DOCKER_HOST`).
    env_var: &'static str,
    /// The JSON path segments (e.g., `["variables", "host"]`).
    path: &'static [&'static str],
    /// The expected value type.
    var_type: EnvVarType,
}

/// Table of all environment variables and their JSON paths.
const ENV_VAR_SPECS: &[EnvVarSpec] = &[
    EnvVarSpec {
        env_var: "DOCKMACHINE_DOCKER_TYPE",
        path: &["docker_type"],
        var_type: EnvVarType::DockerType,
    },
    EnvVarSpec {
        env_var: "DOCKMACHINE_DOCKER_HOST",
        path: &["docker_host"],
        var_type: EnvVarType::String,
    },
    EnvVarSpec {
        env_var: "DOCKMACHINE_TLS_CERT_PATH",
        path: &["tls_cert_path"],
        var_type: EnvVarType::String,
    },
    // Connection variable names
    EnvVarSpec {
        env_var: "DOCKMACHINE_VARIABLES_HOST",
        path: &["variables", "host"],
        var_type: EnvVarType::String,
    },
    EnvVarSpec {
        env_var: "DOCKMACHINE_VARIABLES_TLS_VERIFY",
        path: &["variables", "tls_verify"],
        var_type: EnvVarType::String,
    },
    EnvVarSpec {
        env_var: "DOCKMACHINE_VARIABLES_CERT_PATH",
        path: &["variables", "cert_path"],
        var_type: EnvVarType::String,
    },
];

/// Returns the list of environment variable names recognised by the config loader.
///
/// Tests use this to clear every `DOCKMACHINE_*` variable without keeping a
/// second hard-coded list in sync.
#[must_use]
pub fn env_var_names() -> Vec<&'static str> {
    ENV_VAR_SPECS.iter().map(|spec| spec.env_var).collect()
}

/// Load a configuration file and push it to the composer.
///
/// Uses `cap_std::fs_utf8` for capability-oriented filesystem access: the
/// parent directory is opened first and the file is read from there.
fn load_config_file(path: &Utf8PathBuf, composer: &mut MergeComposer) -> Result<()> {
    let current_dir = Utf8PathBuf::from(".");
    let parent = path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or_else(|| current_dir.as_ref());
    let file_name = path.file_name().unwrap_or(path.as_str());

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        ConfigError::ParseError {
            message: format!("failed to open directory {parent}: {e}"),
        }
    })?;

    let content = dir
        .read_to_string(file_name)
        .map_err(|e| ConfigError::ParseError {
            message: format!("failed to read {path}: {e}"),
        })?;

    let value =
        toml::from_str::<serde_json::Value>(&content).map_err(|e| ConfigError::ParseError {
            message: format!("failed to parse {path}: {e}"),
        })?;

    debug!(%path, "loaded configuration file");
    composer.push_file(value, Some(path.clone()));
    Ok(())
}

/// Load configuration with full layer precedence.
///
/// This function loads configuration from all available sources:
/// 1. Application defaults defined in the struct
/// 2. Configuration file (`--config`, or discovered via `DOCKMACHINE_CONFIG_PATH`
///    and XDG paths)
/// 3. `DOCKMACHINE_*` variables read through `env`
/// 4. Command-line arguments (from the provided `Cli`)
///
/// Later sources override earlier ones.
///
/// # Errors
///
/// Returns `ConfigError` if configuration loading fails due to:
/// - Malformed configuration files
/// - An invalid `DOCKMACHINE_DOCKER_TYPE` value
/// - Layers that cannot be merged into `AppConfig`
/// - Connection variable names that are blank or collide
pub fn load_config<E: mockable::Env>(cli: &Cli, env: &E) -> Result<AppConfig> {
    let mut composer = MergeComposer::new();

    // Layer 1: Defaults (serialised from AppConfig::default()).
    let defaults =
        serde_json::to_value(AppConfig::default()).map_err(|e| ConfigError::ParseError {
            message: format!("failed to serialise defaults: {e}"),
        })?;
    composer.push_defaults(defaults);

    // Layer 2: Configuration file.
    let config_path: Option<Utf8PathBuf> =
        cli.config.clone().filter(|p| p.exists()).or_else(|| {
            let discovery = ConfigDiscovery::builder("dockmachine")
                .env_var("DOCKMACHINE_CONFIG_PATH")
                .config_file_name("config.toml")
                .dotfile_name(".dockmachine.toml")
                .build();
            discovery
                .candidates()
                .into_iter()
                .filter(|p| p.exists())
                .find_map(|p| Utf8PathBuf::try_from(p).ok())
        });

    if let Some(ref path) = config_path {
        load_config_file(path, &mut composer)?;
    }

    // Layer 3: Environment variables.
    let env_values = collect_env_vars(env)?;
    if !env_values.is_null() {
        composer.push_environment(env_values);
    }

    // Layer 4: CLI overrides.
    let cli_overrides = build_cli_overrides(cli);
    if !cli_overrides.is_null() {
        composer.push_cli(cli_overrides);
    }

    let config =
        AppConfig::merge_from_layers(composer.layers()).map_err(ConfigError::OrthoConfig)?;
    config.variables.validate()?;

    Ok(config)
}

/// Collect `DOCKMACHINE_*` environment variables into a JSON value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a typed variable has an unparseable
/// value.
fn collect_env_vars<E: mockable::Env>(env: &E) -> Result<Value> {
    let mut root = Map::new();

    for spec in ENV_VAR_SPECS {
        let Some(raw_value) = env.string(spec.env_var) else {
            continue;
        };

        let json_value = match spec.var_type {
            EnvVarType::String => Value::String(raw_value),
            EnvVarType::DockerType => match DockerType::from_str(&raw_value, true) {
                Ok(docker_type) => Value::String(docker_type.to_string()),
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        field: spec.env_var.to_owned(),
                        reason: format!("expected 'daemon' or 'remote', got '{raw_value}'"),
                    }
                    .into());
                }
            },
        };

        insert_at_path(&mut root, spec.path, json_value);
    }

    if root.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::Object(root))
    }
}

/// Insert a value at a nested path in a JSON map.
///
/// For a path like `["variables", "host"]`, this creates the intermediate
/// `variables` object if needed and inserts `host` within it.
fn insert_at_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((&field, parents)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for &segment in parents {
        let entry = current
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(obj) = entry.as_object_mut() else {
            return;
        };
        current = obj;
    }

    current.insert(field.to_owned(), value);
}

/// Build a JSON value containing CLI overrides.
fn build_cli_overrides(cli: &Cli) -> serde_json::Value {
    let mut overrides = serde_json::Map::new();

    if let Some(docker_type) = cli.docker_type {
        overrides.insert(
            "docker_type".to_owned(),
            serde_json::Value::String(docker_type.to_string()),
        );
    }

    if let Some(ref host) = cli.docker_host {
        overrides.insert(
            "docker_host".to_owned(),
            serde_json::Value::String(host.clone()),
        );
    }

    if let Some(ref cert_path) = cli.tls_cert_path {
        overrides.insert(
            "tls_cert_path".to_owned(),
            serde_json::Value::String(cert_path.clone()),
        );
    }

    if overrides.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::Value::Object(overrides)
    }
}
