//! Shared fixtures and helper functions for config tests.

use crate::config::AppConfig;
use ortho_config::MergeComposer;
use rstest::fixture;
use std::sync::Arc;

/// Fixture providing an `AppConfig` parsed from a full TOML example.
#[fixture]
pub fn app_config_from_full_toml() -> AppConfig {
    let toml = r#"
        docker_type = "remote"
        docker_host = "tcp://10.0.0.5:2376"
        tls_cert_path = "/home/dev/.docker/certs"

        [variables]
        host = "ENGINE_HOST"
        tls_verify = "ENGINE_TLS_VERIFY"
        cert_path = "ENGINE_CERT_PATH"

        [environment]
        COMPOSE_PROJECT_NAME = "demo"
        COMPOSE_HTTP_TIMEOUT = "120"
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing an `AppConfig` parsed from a minimal TOML example.
#[fixture]
pub fn app_config_from_partial_toml() -> AppConfig {
    let toml = r#"
        docker_host = "tcp://10.0.0.5:2375"

        [variables]
        host = "ENGINE_HOST"
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Helper: Creates a `MergeComposer` with defaults layer already pushed.
pub fn create_composer_with_defaults() -> Result<MergeComposer, serde_json::Error> {
    let mut composer = MergeComposer::new();
    let defaults = ortho_config::serde_json::to_value(AppConfig::default())?;
    composer.push_defaults(defaults);
    Ok(composer)
}

/// Helper: Merges layers from a composer into `AppConfig`.
pub fn merge_config(composer: MergeComposer) -> Result<AppConfig, Arc<ortho_config::OrthoError>> {
    AppConfig::merge_from_layers(composer.layers())
}

/// Helper: Asserts that a config has all default values.
pub fn assert_config_has_defaults(config: &AppConfig) {
    assert!(config.docker_host.is_none(), "docker_host should be None");
    assert!(config.tls_cert_path.is_none(), "tls_cert_path should be None");
    assert!(config.docker_type.is_none(), "docker_type should be None");
    assert_eq!(
        config.variables.host, "DOCKER_HOST",
        "variables.host should be DOCKER_HOST"
    );
    assert_eq!(
        config.variables.tls_verify, "DOCKER_TLS_VERIFY",
        "variables.tls_verify should be DOCKER_TLS_VERIFY"
    );
    assert_eq!(
        config.variables.cert_path, "DOCKER_CERT_PATH",
        "variables.cert_path should be DOCKER_CERT_PATH"
    );
    assert!(config.environment.is_empty(), "environment should be empty");
}

/// Helper: Creates a `MergeComposer` with defaults, file, and env layers for testing layer precedence.
pub fn create_composer_with_file_and_env() -> Result<MergeComposer, serde_json::Error> {
    use ortho_config::serde_json::json;

    let mut composer = create_composer_with_defaults()?;

    composer.push_file(
        json!({
            "docker_host": "tcp://file:2376",
            "tls_cert_path": "/file/certs"
        }),
        None,
    );

    composer.push_environment(json!({
        "docker_host": "tcp://env:2376"
    }));

    Ok(composer)
}
