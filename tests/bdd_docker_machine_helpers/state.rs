//! Scenario state for Docker machine behavioural tests.

use dockmachine::environment::{DockerType, EnvironmentMap};
use dockmachine::machine::DockerMachine;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Outcome of building a machine.
#[derive(Debug, Clone)]
pub(crate) enum BuildOutcome {
    /// The builder produced a machine.
    Built(DockerMachine),
    /// The builder returned an error, rendered as text.
    Failed(String),
}

#[derive(Default, ScenarioState)]
pub(crate) struct MachineState {
    pub(crate) system_environment: Slot<EnvironmentMap>,
    pub(crate) docker_type: Slot<DockerType>,
    pub(crate) remote_host: Slot<String>,
    pub(crate) tls_cert_path: Slot<String>,
    pub(crate) additions: Slot<EnvironmentMap>,
    pub(crate) outcome: Slot<BuildOutcome>,
}

#[fixture]
pub(crate) fn machine_state() -> MachineState {
    let state = MachineState::default();
    state.system_environment.set(EnvironmentMap::new());
    state.additions.set(EnvironmentMap::new());
    state
}
