use pkgsearch::config::{Config, ConfigError, RegistryConfig, UiConfig, DEFAULT_REGISTRY_URL};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Config::default() points at the public npm registry with no timeout.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.registry.base_url, DEFAULT_REGISTRY_URL);
    assert_eq!(config.registry.timeout_seconds, None);
    assert!(config.registry.user_agent.starts_with("pkgsearch/"));
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[registry]
base_url = "http://localhost:4873"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.registry.base_url, "http://localhost:4873");
    assert_eq!(config.registry.timeout_seconds, None);
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_full_file_round_trips_fields() {
    let (_dir, path) = write_config(
        r#"
[registry]
base_url = "https://registry.example.com"
timeout_seconds = 10
user_agent = "custom-agent"

[ui]
tick_rate_ms = 100
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.registry,
        RegistryConfig {
            base_url: "https://registry.example.com".into(),
            timeout_seconds: Some(10),
            user_agent: "custom-agent".into(),
        }
    );
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[registry\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_invalid_url_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[registry]
base_url = "registry without scheme"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}
