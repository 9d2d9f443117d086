//! Configuration system for dockmachine.
//!
//! This module provides the configuration structures and CLI definitions for
//! dockmachine. Configuration loading and precedence merging is handled by the
//! `ortho_config` crate: CLI flags override environment variables, which
//! override configuration files, which override defaults.
//!
//! The configuration file is expected at `~/.config/dockmachine/config.toml`
//! by default.
//!
//! # Example Configuration
//!
//! ```toml
//! docker_type = "remote"
//! docker_host = "tcp://10.0.0.5:2376"
//! tls_cert_path = "/home/dev/.docker/certs"
//!
//! [variables]
//! host = "DOCKER_HOST"
//! tls_verify = "DOCKER_TLS_VERIFY"
//! cert_path = "DOCKER_CERT_PATH"
//!
//! [environment]
//! COMPOSE_PROJECT_NAME = "demo"
//! ```

mod cli;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Commands, EnvArgs};
pub use loader::{env_var_names, load_config};
pub use types::AppConfig;
