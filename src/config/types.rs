//! Configuration data types for dockmachine.

use ortho_config::{OrthoConfig, OrthoResult, PostMergeContext, PostMergeHook};
use serde::{Deserialize, Serialize};

use crate::environment::{DockerType, EnvironmentMap, VariableNames};

/// Root application configuration.
///
/// This structure is loaded from configuration files, environment variables,
/// and command-line arguments with layered precedence. The precedence order
/// (lowest to highest) is: defaults, configuration file, environment variables,
/// command-line arguments.
///
/// Configuration files are discovered in this order:
/// 1. Path specified via `DOCKMACHINE_CONFIG_PATH` environment variable
/// 2. `.dockmachine.toml` in the current working directory
/// 3. `.dockmachine.toml` in the home directory
/// 4. `~/.config/dockmachine/config.toml` (XDG default)
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(
    prefix = "DOCKMACHINE",
    post_merge_hook,
    discovery(
        app_name = "dockmachine",
        env_var = "DOCKMACHINE_CONFIG_PATH",
        config_file_name = "config.toml",
        dotfile_name = ".dockmachine.toml",
        config_cli_long = "config",
        config_cli_visible = true,
    )
)]
pub struct AppConfig {
    /// Address of a remote daemon, e.g. `tcp://10.0.0.5:2376`.
    pub docker_host: Option<String>,

    /// Directory holding the TLS client certificates of a remote daemon.
    pub tls_cert_path: Option<String>,

    /// Connection mode of the local machine; detected when unset.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub docker_type: Option<DockerType>,

    /// Names of the connection variables.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub variables: VariableNames,

    /// Additional variables passed to every launched process.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub environment: EnvironmentMap,
}

impl PostMergeHook for AppConfig {
    fn post_merge(&mut self, _ctx: &PostMergeContext) -> OrthoResult<()> {
        // Blank values from any layer mean "not configured".
        self.docker_host = self.docker_host.take().filter(|host| !host.trim().is_empty());
        self.tls_cert_path = self.tls_cert_path.take().filter(|path| !path.trim().is_empty());
        Ok(())
    }
}
