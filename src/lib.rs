//! Docker connection configuration for local and remote daemons.
//!
//! `dockmachine` resolves how a `docker-compose` process should reach a Docker
//! daemon. A daemon is either configured in the calling process's environment
//! (a local daemon socket, or a remote daemon exported by `docker-machine`) or
//! described explicitly as a remote TCP endpoint with optional TLS.
//!
//! Resolution validates the connection variables for the selected mode,
//! derives the host IP used to address the daemon, and merges caller-supplied
//! variables into the environment the launched process receives.
//!
//! # Modules
//!
//! - [`api`]: Orchestration functions shared by the CLI and embedders
//! - [`config`]: Configuration system with layered precedence (CLI > env > file > defaults)
//! - [`environment`]: Connection variables, validation and host IP resolution
//! - [`error`]: Semantic error types for the application
//! - [`machine`]: Resolved machines and the builders that produce them

pub mod api;
pub mod config;
pub mod environment;
pub mod error;
pub mod machine;
