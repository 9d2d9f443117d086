//! Connection environments for local and remote Docker daemons.
//!
//! This module holds the pieces that decide whether an environment is fit to
//! reach a Docker daemon:
//!
//! - [`VariableNames`]: the names of the connection variables
//!   (`DOCKER_HOST`, `DOCKER_TLS_VERIFY`, `DOCKER_CERT_PATH` by default)
//! - [`DockerType`]: the connection mode, which selects the validation rules
//!   and the host IP resolution strategy
//! - [`validation`]: pure checks for daemon, remote and additional environments
//! - [`HostIpResolver`]: turns a raw `DOCKER_HOST` value into the address to
//!   record for the daemon
//! - [`merge`]: layers user additions over a base environment

mod resolver;
pub mod validation;


use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::error::{ConfigError, ValidationError};

pub use resolver::{DaemonHostIpResolver, HostIpResolver, LOCALHOST, RemoteHostIpResolver};

/// A mapping from environment variable name to value.
///
/// Ordered so that rendered environments are stable; lookups never depend on
/// the order.
pub type EnvironmentMap = BTreeMap<String, String>;

/// Names of the variables that bootstrap a Docker connection.
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault, Deserialize, Serialize)]
#[serde(default)]
pub struct VariableNames {
    /// Variable holding the daemon address.
    #[default = "DOCKER_HOST"]
    pub host: String,

    /// Variable enabling TLS verification of the daemon.
    #[default = "DOCKER_TLS_VERIFY"]
    pub tls_verify: String,

    /// Variable holding the directory of the TLS client certificates.
    #[default = "DOCKER_CERT_PATH"]
    pub cert_path: String,
}

impl VariableNames {
    /// Returns every connection variable name.
    #[must_use]
    pub fn all(&self) -> [&str; 3] {
        [
            self.host.as_str(),
            self.tls_verify.as_str(),
            self.cert_path.as_str(),
        ]
    }

    /// Checks that every name is non-blank and that the three are distinct.
    ///
    /// Colliding names would let one connection variable overwrite another.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the blank field, or
    /// `variables` when two names coincide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, name) in [
            ("variables.host", &self.host),
            ("variables.tls_verify", &self.tls_verify),
            ("variables.cert_path", &self.cert_path),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: String::from(field),
                    reason: String::from("variable name cannot be blank"),
                });
            }
        }

        let distinct: BTreeSet<&str> = self.all().into_iter().collect();
        if distinct.len() == self.all().len() {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: String::from("variables"),
                reason: format!(
                    "variable names must be distinct, got {}",
                    self.all().join(", ")
                ),
            })
        }
    }

    /// Looks up the daemon address in `environment`, defaulting to `""`.
    #[must_use]
    pub fn host_in<'a>(&self, environment: &'a EnvironmentMap) -> &'a str {
        environment.get(&self.host).map_or("", String::as_str)
    }
}

/// Where the Docker daemon runs relative to the calling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockerType {
    /// The daemon listens on the local machine.
    Daemon,
    /// The daemon is reached over the network, optionally with TLS.
    Remote,
}

impl DockerType {
    /// Picks the connection mode implied by an ambient environment.
    ///
    /// A TLS verification flag, or a daemon address that is not local, means
    /// the daemon is remote (for example a docker-machine VM). Anything else
    /// is treated as a local daemon.
    #[must_use]
    pub fn detect(environment: &EnvironmentMap, names: &VariableNames) -> Self {
        let tls_requested = validation::is_set(environment, &names.tls_verify);
        let host = names.host_in(environment);
        if tls_requested || !resolver::is_local_host(host) {
            Self::Remote
        } else {
            Self::Daemon
        }
    }

    /// Validates `environment` against this mode's rules.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] raised by the daemon or remote
    /// validator.
    pub fn validate(
        self,
        environment: &EnvironmentMap,
        names: &VariableNames,
    ) -> Result<(), ValidationError> {
        match self {
            Self::Daemon => validation::validate_daemon_environment(environment, names),
            Self::Remote => validation::validate_remote_environment(environment, names),
        }
    }

    /// Returns the host IP resolution strategy for this mode.
    #[must_use]
    pub fn host_ip_resolver(self) -> &'static dyn HostIpResolver {
        match self {
            Self::Daemon => &DaemonHostIpResolver,
            Self::Remote => &RemoteHostIpResolver,
        }
    }
}

impl fmt::Display for DockerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daemon => f.write_str("daemon"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

/// Snapshots the current process environment.
///
/// Entries whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn process_environment() -> EnvironmentMap {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Layers `additions` over `base`.
///
/// Keys present in `additions` take its value; every other key from either
/// map is kept unchanged.
#[must_use]
pub fn merge(base: &EnvironmentMap, additions: &EnvironmentMap) -> EnvironmentMap {
    base.iter()
        .chain(additions)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
