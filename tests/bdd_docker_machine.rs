//! Behavioural tests for Docker machine resolution.

mod bdd_docker_machine_helpers;

use bdd_docker_machine_helpers::{MachineState, machine_state};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Empty environment resolves to the local daemon"
)]
fn empty_environment_resolves_to_the_local_daemon(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Local socket resolves to the local daemon"
)]
fn local_socket_resolves_to_the_local_daemon(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "docker-machine environment resolves to the remote host"
)]
fn docker_machine_environment_resolves_to_the_remote_host(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Daemon mode rejects TLS variables"
)]
fn daemon_mode_rejects_tls_variables(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Daemon mode rejects a remote host"
)]
fn daemon_mode_rejects_a_remote_host(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Remote mode requires a certificate path when TLS is enabled"
)]
fn remote_mode_requires_a_certificate_path_when_tls_is_enabled(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Additional variables override the process environment"
)]
fn additional_variables_override_the_process_environment(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Additional variables may not redefine the daemon host"
)]
fn additional_variables_may_not_redefine_the_daemon_host(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Remote machine with TLS"
)]
fn remote_machine_with_tls(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Remote machine without TLS"
)]
fn remote_machine_without_tls(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Remote machine requires a host"
)]
fn remote_machine_requires_a_host(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Remote machine rejects socket addresses"
)]
fn remote_machine_rejects_socket_addresses(machine_state: MachineState) {
    let _ = machine_state;
}

#[scenario(
    path = "tests/features/docker_machine.feature",
    name = "Remote machine drops user information from the host"
)]
fn remote_machine_drops_user_information_from_the_host(machine_state: MachineState) {
    let _ = machine_state;
}
