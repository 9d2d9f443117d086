//! Environment validators for each connection mode.
//!
//! Validators are pure: they inspect an [`EnvironmentMap`] and either accept
//! it or report every offending variable at once.

use super::resolver::is_local_host;
use super::{DockerType, EnvironmentMap, VariableNames};
use crate::error::ValidationError;

/// Returns the sorted subset of `candidates` for which `predicate` holds.
fn collect_names<'a, F>(candidates: impl IntoIterator<Item = &'a str>, predicate: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut names: Vec<String> = candidates
        .into_iter()
        .filter(|name| predicate(name))
        .map(String::from)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Returns true when `name` is set to a non-empty value.
pub(super) fn is_set(environment: &EnvironmentMap, name: &str) -> bool {
    environment.get(name).is_some_and(|value| !value.is_empty())
}

/// Checks an environment that will talk to a daemon on the local machine.
///
/// The TLS verification flag and certificate path only make sense for a
/// remote daemon, so neither may be set to a non-empty value. The daemon
/// address may be set only to a local socket, named pipe or loopback
/// address.
///
/// # Errors
///
/// Returns [`ValidationError::ForbiddenVariables`] naming every TLS variable
/// that was set and the daemon address when it points elsewhere.
pub fn validate_daemon_environment(
    environment: &EnvironmentMap,
    names: &VariableNames,
) -> Result<(), ValidationError> {
    let host_is_remote = !is_local_host(names.host_in(environment));
    let forbidden = collect_names(names.all(), |name| {
        if name == names.host {
            host_is_remote
        } else {
            is_set(environment, name)
        }
    });
    if forbidden.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::ForbiddenVariables {
            mode: DockerType::Daemon,
            variables: forbidden,
        })
    }
}

/// Checks an environment that will talk to a daemon over the network.
///
/// The daemon address must be set. The TLS verification flag and the
/// certificate path require each other.
///
/// # Errors
///
/// Returns [`ValidationError::MissingVariables`] naming the missing address
/// and any TLS variable whose partner was not supplied.
pub fn validate_remote_environment(
    environment: &EnvironmentMap,
    names: &VariableNames,
) -> Result<(), ValidationError> {
    let verify_set = is_set(environment, &names.tls_verify);
    let cert_path_set = is_set(environment, &names.cert_path);

    let missing = collect_names(names.all(), |name| {
        if name == names.host {
            !is_set(environment, name)
        } else if name == names.tls_verify {
            cert_path_set && !verify_set
        } else {
            verify_set && !cert_path_set
        }
    });

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingVariables {
            mode: DockerType::Remote,
            variables: missing,
        })
    }
}

/// Checks that user-supplied additions leave the connection variables alone.
///
/// # Errors
///
/// Returns [`ValidationError::ReservedVariables`] naming every connection
/// variable found in `additions`.
pub fn validate_additional_environment(
    additions: &EnvironmentMap,
    names: &VariableNames,
) -> Result<(), ValidationError> {
    let reserved = collect_names(names.all(), |name| additions.contains_key(name));
    if reserved.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::ReservedVariables {
            variables: reserved,
        })
    }
}
