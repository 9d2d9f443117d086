//! Assertion helpers for Docker machine behavioural tests.

use dockmachine::machine::DockerMachine;
use rstest_bdd_macros::then;

use super::StepResult;
use super::state::{BuildOutcome, MachineState};

/// Returns the built machine or describes why there is none.
fn built_machine(machine_state: &MachineState) -> StepResult<DockerMachine> {
    match machine_state.outcome.get() {
        Some(BuildOutcome::Built(machine)) => Ok(machine),
        Some(BuildOutcome::Failed(msg)) => Err(format!("expected a machine, got error: {msg}")),
        None => Err(String::from("build outcome should be set")),
    }
}

#[then("the host IP is {ip}")]
fn host_ip_is(machine_state: &MachineState, ip: String) -> StepResult<()> {
    let machine = built_machine(machine_state)?;
    if machine.ip() == ip {
        Ok(())
    } else {
        Err(format!("expected host IP {ip}, got {}", machine.ip()))
    }
}

#[then("the machine environment is empty")]
fn machine_environment_is_empty(machine_state: &MachineState) -> StepResult<()> {
    let machine = built_machine(machine_state)?;
    if machine.environment().is_empty() {
        Ok(())
    } else {
        Err(format!(
            "expected an empty environment, got {:?}",
            machine.environment()
        ))
    }
}

#[then("the machine variable {key} is {value}")]
fn machine_variable_is(machine_state: &MachineState, key: String, value: String) -> StepResult<()> {
    let machine = built_machine(machine_state)?;
    match machine.environment().get(&key) {
        Some(actual) if *actual == value => Ok(()),
        Some(actual) => Err(format!("expected {key}={value}, got {key}={actual}")),
        None => Err(format!("expected {key}={value}, but {key} is not set")),
    }
}

#[then("the machine has no variable {key}")]
fn machine_has_no_variable(machine_state: &MachineState, key: String) -> StepResult<()> {
    let machine = built_machine(machine_state)?;
    match machine.environment().get(&key) {
        None => Ok(()),
        Some(actual) => Err(format!("expected {key} to be unset, got {actual}")),
    }
}

#[then("the build fails mentioning {text}")]
fn build_fails_mentioning(machine_state: &MachineState, text: String) -> StepResult<()> {
    match machine_state.outcome.get() {
        Some(BuildOutcome::Failed(msg)) if msg.contains(&text) => Ok(()),
        Some(BuildOutcome::Failed(msg)) => {
            Err(format!("expected error mentioning '{text}', got: {msg}"))
        }
        Some(BuildOutcome::Built(machine)) => Err(format!(
            "expected a failure, got machine at {}",
            machine.ip()
        )),
        None => Err(String::from("build outcome should be set")),
    }
}
