//! Builder for a daemon configured in the calling process's environment.

use tracing::debug;

use super::DockerMachine;
use crate::environment::validation::validate_additional_environment;
use crate::environment::{DockerType, EnvironmentMap, HostIpResolver, VariableNames, merge};
use crate::error::Result;

/// Builds a [`DockerMachine`] from a snapshot of the ambient environment.
///
/// The snapshot is taken once, when the builder is created, so later changes
/// to the process environment never leak into a build. The connection mode
/// and its host IP resolver are fixed at the same moment.
#[derive(Debug, Clone)]
pub struct LocalBuilder {
    docker_type: DockerType,
    resolver: &'static dyn HostIpResolver,
    names: VariableNames,
    system_environment: EnvironmentMap,
    additional_environment: EnvironmentMap,
}

impl LocalBuilder {
    /// Creates a builder over an explicit environment snapshot.
    #[must_use]
    pub fn new(docker_type: DockerType, system_environment: EnvironmentMap) -> Self {
        Self {
            docker_type,
            resolver: docker_type.host_ip_resolver(),
            names: VariableNames::default(),
            system_environment,
            additional_environment: EnvironmentMap::new(),
        }
    }

    /// Snapshots `environment` and creates a builder over it.
    ///
    /// When `docker_type` is `None` the mode is detected from the snapshot
    /// using `names`.
    #[must_use]
    pub fn from_env<I>(
        environment: I,
        docker_type: Option<DockerType>,
        names: VariableNames,
    ) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let snapshot: EnvironmentMap = environment.into_iter().collect();
        let selected = docker_type.unwrap_or_else(|| DockerType::detect(&snapshot, &names));
        Self::new(selected, snapshot).with_variable_names(names)
    }

    /// Uses `names` to look up the connection variables.
    #[must_use]
    pub fn with_variable_names(mut self, names: VariableNames) -> Self {
        self.names = names;
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

    /// Returns the connection mode fixed when the builder was created.
    #[must_use]
    pub const fn docker_type(&self) -> DockerType {
        self.docker_type
    }

    /// Validates the snapshot and additions, resolves the host IP and merges
    /// the environments.
    ///
    /// Building does not consume the builder; repeated builds over unchanged
    /// inputs produce equal machines.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::InvalidValue`] when the variable
    /// names are blank or collide, a validation error when the snapshot
    /// breaks the mode's rules or the additions redefine a connection
    /// variable, and a resolution error when the daemon address is malformed
    /// for the mode.
    pub fn build(&self) -> Result<DockerMachine> {
        self.names.validate()?;
        self.docker_type
            .validate(&self.system_environment, &self.names)?;

        let docker_host = self.names.host_in(&self.system_environment);
        let host_ip = self.resolver.resolve_ip(docker_host)?;

        validate_additional_environment(&self.additional_environment, &self.names)?;
        let environment = merge(&self.system_environment, &self.additional_environment);

        debug!(
            docker_type = %self.docker_type,
            host_ip = %host_ip,
            additional_variables = self.additional_environment.len(),
            "resolved local docker machine"
        );
        Ok(DockerMachine::new(host_ip, environment))
    }
}
