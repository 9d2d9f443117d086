//! Semantic error types for the dockmachine library.
//!
//! This module defines the error hierarchy for dockmachine, following the
//! principle of using semantic error enums (via `thiserror`) for conditions the
//! caller might inspect or report, while reserving opaque errors
//! (`eyre::Report`) for the application boundary.

use std::sync::Arc;

use thiserror::Error;

use crate::environment::DockerType;

/// Joins variable names into the comma-separated form used in messages.
fn join_names(names: &[String]) -> String {
    names.join(", ")
}

/// Errors raised when an environment does not meet the preconditions of a
/// connection mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Variables that belong to another connection mode were set.
    #[error(
        "these variables were set: {}; they cannot be set in {mode} mode",
        join_names(.variables)
    )]
    ForbiddenVariables {
        /// The connection mode being validated.
        mode: DockerType,
        /// The offending variable names, sorted.
        variables: Vec<String>,
    },

    /// Variables required by the connection mode were missing or empty.
    #[error(
        "missing required environment variables: {}; they must be set in {mode} mode",
        join_names(.variables)
    )]
    MissingVariables {
        /// The connection mode being validated.
        mode: DockerType,
        /// The missing variable names, sorted.
        variables: Vec<String>,
    },

    /// The additional environment redefined a connection variable.
    #[error(
        "the following variables cannot exist in the additional environment as they will interfere with docker: {}",
        join_names(.variables)
    )]
    ReservedVariables {
        /// The reserved variable names that were supplied, sorted.
        variables: Vec<String>,
    },
}

/// Errors raised when a raw host string cannot be turned into a host IP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The host string was empty where a remote address is required.
    #[error("docker host cannot be blank")]
    EmptyHost,

    /// The host string used a scheme the resolver cannot address.
    #[error("unsupported scheme '{scheme}' in docker host '{host}'")]
    UnsupportedScheme {
        /// The full host string.
        host: String,
        /// The scheme that was rejected.
        scheme: String,
    },

    /// No host component could be extracted from the host string.
    #[error("no host component in docker host '{host}'")]
    MissingHost {
        /// The full host string.
        host: String,
    },
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or parsed.
    #[error("failed to parse configuration file: {message}")]
    ParseError {
        /// A description of the parse error.
        message: String,
    },

    /// A required configuration value is missing.
    #[error("missing required configuration: {field}")]
    MissingRequired {
        /// The name of the missing field.
        field: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the invalid field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// The `OrthoConfig` library returned an error while merging layers.
    #[error("configuration loading failed: {0}")]
    OrthoConfig(Arc<ortho_config::OrthoError>),
}

/// Top-level error type for dockmachine.
///
/// This enum aggregates the domain-specific errors into a single type. At the
/// application boundary (main.rs) these errors are converted to
/// `eyre::Report` for human-readable reporting.
#[derive(Debug, Error)]
pub enum DockMachineError {
    /// The environment failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The docker host could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A specialised `Result` type for dockmachine operations.
pub type Result<T> = std::result::Result<T, DockMachineError>;
