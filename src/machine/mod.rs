//! Resolved Docker machines and the builders that produce them.
//!
//! A [`DockerMachine`] is the finished connection artefact: the host IP used
//! to address the daemon plus the environment a `docker-compose` process must
//! be launched with. Machines are produced by [`LocalBuilder`] (the daemon
//! configured in the calling process's environment) or [`RemoteBuilder`]
//! (a daemon described entirely through fluent calls) and are never mutated
//! afterwards.
//!
//! # Example
//!
//! ```ignore
//! use dockmachine::machine::DockerMachine;
//!
//! let machine = DockerMachine::remote_machine()
//!     .host("tcp://10.0.0.5:2376")
//!     .with_tls("/home/dev/.docker/certs")
//!     .with_additional_environment_variable("COMPOSE_PROJECT_NAME", "demo")
//!     .build()?;
//!
//! assert_eq!(machine.ip(), "10.0.0.5");
//! ```

mod local;
mod remote;


use std::ffi::OsStr;
use std::process::Command;

use crate::environment::{DockerType, EnvironmentMap, VariableNames, process_environment};

pub use local::LocalBuilder;
pub use remote::RemoteBuilder;

/// Executable launched by [`DockerConfiguration::configured_docker_compose_process`].
pub const DOCKER_COMPOSE_EXECUTABLE: &str = "docker-compose";

/// Supplies launch-ready `docker-compose` processes.
///
/// Implementors only prepare the [`Command`]; spawning and supervising it is
/// left to the caller.
pub trait DockerConfiguration {
    /// Returns an unspawned `docker-compose` command whose environment is
    /// configured to reach the daemon.
    fn configured_docker_compose_process(&self) -> Command;
}

/// The resolved connection to a Docker daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerMachine {
    host_ip: String,
    environment: EnvironmentMap,
}

impl DockerMachine {
    /// Creates a machine from an already validated host IP and environment.
    pub(crate) const fn new(host_ip: String, environment: EnvironmentMap) -> Self {
        Self {
            host_ip,
            environment,
        }
    }

    /// Starts a builder for the daemon configured in this process's
    /// environment.
    ///
    /// The environment is snapshotted now; the connection mode is detected
    /// from it (see [`DockerType::detect`]).
    #[must_use]
    pub fn local_machine() -> LocalBuilder {
        LocalBuilder::from_env(process_environment(), None, VariableNames::default())
    }

    /// Starts a builder for this process's environment in an explicit mode.
    #[must_use]
    pub fn local_machine_of_type(docker_type: DockerType) -> LocalBuilder {
        LocalBuilder::from_env(
            process_environment(),
            Some(docker_type),
            VariableNames::default(),
        )
    }

    /// Starts a builder over `environment` instead of the process
    /// environment.
    ///
    /// When `docker_type` is `None` the mode is detected from the snapshot.
    #[must_use]
    pub fn local_machine_with<I>(environment: I, docker_type: Option<DockerType>) -> LocalBuilder
    where
        I: IntoIterator<Item = (String, String)>,
    {
        LocalBuilder::from_env(environment, docker_type, VariableNames::default())
    }

    /// Starts a builder for a daemon described only through fluent calls.
    #[must_use]
    pub fn remote_machine() -> RemoteBuilder {
        RemoteBuilder::new()
    }

    /// Returns the IP address (or hostname) of the daemon.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.host_ip
    }

    /// Returns the environment the daemon's clients must be launched with.
    #[must_use]
    pub const fn environment(&self) -> &EnvironmentMap {
        &self.environment
    }

    /// Copies this machine's environment into `target`.
    ///
    /// Keys already present in `target` are overwritten; unrelated keys are
    /// left alone.
    pub fn configure_launch_environment<T>(&self, target: &mut T)
    where
        T: Extend<(String, String)>,
    {
        target.extend(
            self.environment
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }

    /// Returns an unspawned command for `program` configured with this
    /// machine's environment.
    #[must_use]
    pub fn configured_process(&self, program: impl AsRef<OsStr>) -> Command {
        let mut launch_environment = EnvironmentMap::new();
        self.configure_launch_environment(&mut launch_environment);

        let mut command = Command::new(program);
        command.envs(launch_environment);
        command
    }
}

impl DockerConfiguration for DockerMachine {
    fn configured_docker_compose_process(&self) -> Command {
        self.configured_process(DOCKER_COMPOSE_EXECUTABLE)
    }
}
