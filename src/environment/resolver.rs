//! Host IP resolution for daemon and remote connections.
//!
//! The address recorded for a daemon depends only on where the daemon runs:
//! a local daemon is always addressed through the loopback interface, while a
//! remote daemon is addressed through the host named in `DOCKER_HOST`.

use std::fmt;
use std::net::IpAddr;

use crate::error::ResolutionError;

/// Address used for a daemon running on the local machine.
pub const LOCALHOST: &str = "127.0.0.1";

/// Schemes that address a daemon over the network.
const NETWORK_SCHEMES: &[&str] = &["tcp", "http", "https"];

/// Schemes that address a daemon through a local socket or named pipe.
const SOCKET_SCHEMES: &[&str] = &["unix", "npipe"];

/// Resolves the IP address (or hostname) used to reach a Docker daemon.
pub trait HostIpResolver: fmt::Debug + Send + Sync {
    /// Resolves `raw_host`, the value of the daemon address variable.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] when `raw_host` is malformed for this
    /// strategy.
    fn resolve_ip(&self, raw_host: &str) -> Result<String, ResolutionError>;
}

/// Resolves every local daemon to [`LOCALHOST`].
///
/// The raw host is only checked for form: an unknown scheme or a network
/// address without a host is rejected. Whether the address is actually local
/// is decided by the daemon validator before resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaemonHostIpResolver;

impl HostIpResolver for DaemonHostIpResolver {
    fn resolve_ip(&self, raw_host: &str) -> Result<String, ResolutionError> {
        let trimmed = raw_host.trim();
        match split_scheme(trimmed) {
            (Some(scheme), _) if SOCKET_SCHEMES.contains(&scheme) => Ok(String::from(LOCALHOST)),
            (Some(scheme), authority) if NETWORK_SCHEMES.contains(&scheme) => {
                host_component(authority)
                    .map(|_| String::from(LOCALHOST))
                    .ok_or_else(|| ResolutionError::MissingHost {
                        host: trimmed.to_owned(),
                    })
            }
            (Some(scheme), _) => Err(ResolutionError::UnsupportedScheme {
                host: trimmed.to_owned(),
                scheme: scheme.to_owned(),
            }),
            (None, _) => Ok(String::from(LOCALHOST)),
        }
    }
}

/// Resolves a remote daemon to the host component of its address.
///
/// Accepts `tcp://host:port`, `http(s)://host:port` and bare `host:port`
/// forms. IPv6 literals must be bracketed (`tcp://[fd00::1]:2376`) and any
/// `user@` prefix is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteHostIpResolver;

impl HostIpResolver for RemoteHostIpResolver {
    fn resolve_ip(&self, raw_host: &str) -> Result<String, ResolutionError> {
        let trimmed = raw_host.trim();
        if trimmed.is_empty() {
            return Err(ResolutionError::EmptyHost);
        }

        let (scheme, authority) = split_scheme(trimmed);
        if let Some(unsupported) = scheme.filter(|s| !NETWORK_SCHEMES.contains(s)) {
            return Err(ResolutionError::UnsupportedScheme {
                host: trimmed.to_owned(),
                scheme: unsupported.to_owned(),
            });
        }

        host_component(authority)
            .map(str::to_owned)
            .ok_or_else(|| ResolutionError::MissingHost {
                host: trimmed.to_owned(),
            })
    }
}

/// Splits `scheme://rest` into its parts; strings without a scheme are
/// returned whole.
fn split_scheme(raw: &str) -> (Option<&str>, &str) {
    raw.split_once("://")
        .map_or((None, raw), |(scheme, rest)| (Some(scheme), rest))
}

/// Extracts the host from `[user@]host[:port][/path]`.
///
/// Returns `None` when no host is present, and for unbracketed addresses
/// with more than one colon, where an IPv6 literal cannot be told apart from
/// a trailing port.
fn host_component(authority: &str) -> Option<&str> {
    let without_path = authority.split('/').next().unwrap_or_default();
    let host_port = without_path
        .rsplit_once('@')
        .map_or(without_path, |(_, host_port)| host_port);

    let host = match host_port.strip_prefix('[') {
        Some(bracketed) => bracketed.split_once(']').map(|(host, _)| host)?,
        None if host_port.matches(':').count() > 1 => return None,
        None => host_port.split(':').next().unwrap_or_default(),
    };

    Some(host).filter(|h| !h.is_empty())
}

/// Returns true for `localhost` and loopback IP literals.
fn is_loopback(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost")
        || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

/// Returns true when `raw_host` addresses a daemon on the local machine.
///
/// Empty values, local sockets, named pipes, bare socket paths and loopback
/// network addresses all count as local.
pub(super) fn is_local_host(raw_host: &str) -> bool {
    let trimmed = raw_host.trim();
    if trimmed.is_empty() {
        return true;
    }

    match split_scheme(trimmed) {
        (Some(scheme), _) if SOCKET_SCHEMES.contains(&scheme) => true,
        (Some(scheme), authority) if NETWORK_SCHEMES.contains(&scheme) => {
            host_component(authority).is_some_and(is_loopback)
        }
        (Some(_), _) => false,
        (None, path) => {
            path.starts_with('/')
                || path.starts_with('\\')
                || is_loopback(path)
                || host_component(path).is_some_and(is_loopback)
        }
    }
}
