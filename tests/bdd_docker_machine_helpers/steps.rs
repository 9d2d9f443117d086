//! Given/when steps for Docker machine scenarios.

use dockmachine::environment::{DockerType, EnvironmentMap, VariableNames};
use dockmachine::machine::{DockerMachine, LocalBuilder, RemoteBuilder};
use rstest_bdd_macros::{given, when};

use super::StepResult;
use super::state::{BuildOutcome, MachineState};

/// Stores the result of a build in state.
fn record_build(machine_state: &MachineState, result: dockmachine::error::Result<DockerMachine>) {
    let outcome = match result {
        Ok(machine) => BuildOutcome::Built(machine),
        Err(e) => BuildOutcome::Failed(e.to_string()),
    };
    machine_state.outcome.set(outcome);
}

/// Inserts `key=value` into the map held by `slot`.
fn insert_into(slot: &rstest_bdd::Slot<EnvironmentMap>, key: String, value: String) {
    let mut map = slot.get().unwrap_or_default();
    map.insert(key, value);
    slot.set(map);
}

#[given("an empty process environment")]
fn given_empty_environment(machine_state: &MachineState) {
    machine_state.system_environment.set(EnvironmentMap::new());
}

#[given("the process variable {key} is {value}")]
fn given_process_variable(machine_state: &MachineState, key: String, value: String) {
    insert_into(&machine_state.system_environment, key, value);
}

#[given("the additional variable {key} is {value}")]
fn given_additional_variable(machine_state: &MachineState, key: String, value: String) {
    insert_into(&machine_state.additions, key, value);
}

#[given("the connection mode is daemon")]
fn given_daemon_mode(machine_state: &MachineState) {
    machine_state.docker_type.set(DockerType::Daemon);
}

#[given("the connection mode is remote")]
fn given_remote_mode(machine_state: &MachineState) {
    machine_state.docker_type.set(DockerType::Remote);
}

#[given("a remote daemon at {host}")]
fn given_remote_host(machine_state: &MachineState, host: String) {
    machine_state.remote_host.set(host);
}

#[given("TLS certificates in {cert_path}")]
fn given_tls_certificates(machine_state: &MachineState, cert_path: String) {
    machine_state.tls_cert_path.set(cert_path);
}

#[when("the local machine is built")]
fn when_local_machine_built(machine_state: &MachineState) -> StepResult<()> {
    let system_environment = machine_state
        .system_environment
        .get()
        .ok_or_else(|| String::from("process environment should be configured"))?;
    let additions = machine_state.additions.get().unwrap_or_default();
    let docker_type = machine_state.docker_type.get().unwrap_or_else(|| {
        DockerType::detect(&system_environment, &VariableNames::default())
    });

    let result = LocalBuilder::new(docker_type, system_environment)
        .with_environment(additions)
        .build();
    record_build(machine_state, result);
    Ok(())
}

#[when("the remote machine is built")]
fn when_remote_machine_built(machine_state: &MachineState) {
    let mut builder = RemoteBuilder::new();
    if let Some(host) = machine_state.remote_host.get() {
        builder = builder.host(host);
    }
    if let Some(cert_path) = machine_state.tls_cert_path.get() {
        builder = builder.with_tls(cert_path);
    }
    let additions = machine_state.additions.get().unwrap_or_default();

    record_build(machine_state, builder.with_environment(additions).build());
}
