//! Builder for a daemon reached over the network.

use tracing::debug;

use super::DockerMachine;
use crate::environment::validation::validate_additional_environment;
use crate::environment::{
    DockerType, EnvironmentMap, HostIpResolver, RemoteHostIpResolver, VariableNames, merge,
};
use crate::error::Result;

/// Value written to the TLS verification variable by [`RemoteBuilder::with_tls`].
const TLS_VERIFY_ENABLED: &str = "1";

/// Builds a [`DockerMachine`] for a remote daemon.
///
/// The TLS verification flag and certificate path are held as one setting so
/// they are always added and removed together.
#[derive(Debug, Clone, Default)]
pub struct RemoteBuilder {
    names: VariableNames,
    host: Option<String>,
    tls_cert_path: Option<String>,
    additional_environment: EnvironmentMap,
}

impl RemoteBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `names` for the connection variables written by this builder.
    #[must_use]
    pub fn with_variable_names(mut self, names: VariableNames) -> Self {
        self.names = names;
        self
    }

    /// Sets the daemon address, e.g. `tcp://10.0.0.5:2376`.
    #[must_use]
    pub fn host(mut self, hostname: impl Into<String>) -> Self {
        self.host = Some(hostname.into());
        self
    }

    /// Enables TLS verification using the certificates in `cert_path`.
    #[must_use]
    pub fn with_tls(mut self, cert_path: impl Into<String>) -> Self {
        self.tls_cert_path = Some(cert_path.into());
        self
    }

    /// Removes the TLS verification flag and certificate path.
    #[must_use]
    pub fn without_tls(mut self) -> Self {
        self.tls_cert_path = None;
        self
    }

    /// Adds a single variable to the additional environment.
    #[must_use]
    pub fn with_additional_environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.additional_environment.insert(key.into(), value.into());
        self
    }

    /// Replaces the additional environment with `environment`.
    ///
    /// An empty iterator clears every previously added variable.
    #[must_use]
    pub fn with_environment<I, K, V>(mut self, environment: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.additional_environment = environment
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    /// Returns the connection variables accumulated so far.
    #[must_use]
    pub fn docker_environment(&self) -> EnvironmentMap {
        let mut environment = EnvironmentMap::new();
        if let Some(host) = &self.host {
            environment.insert(self.names.host.clone(), host.clone());
        }
        if let Some(cert_path) = &self.tls_cert_path {
            environment.insert(
                self.names.tls_verify.clone(),
                String::from(TLS_VERIFY_ENABLED),
            );
            environment.insert(self.names.cert_path.clone(), cert_path.clone());
        }
        environment
    }

    /// Validates the connection variables and additions, resolves the host
    /// IP and merges the environments.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::InvalidValue`] when the variable
    /// names are blank or collide, a validation error when the daemon address
    /// is missing or the additions redefine a connection variable, and a
    /// resolution error when no host can be extracted from the daemon
    /// address.
    pub fn build(&self) -> Result<DockerMachine> {
        self.names.validate()?;
        let docker_environment = self.docker_environment();
        DockerType::Remote.validate(&docker_environment, &self.names)?;
        validate_additional_environment(&self.additional_environment, &self.names)?;

        let docker_host = self.names.host_in(&docker_environment);
        let host_ip = RemoteHostIpResolver.resolve_ip(docker_host)?;

        let environment = merge(&docker_environment, &self.additional_environment);

        debug!(
            host_ip = %host_ip,
            tls = self.tls_cert_path.is_some(),
            additional_variables = self.additional_environment.len(),
            "resolved remote docker machine"
        );
        Ok(DockerMachine::new(host_ip, environment))
    }
}
