//! Configuration loading from files and environment.

use std::io::Write;

use rail_advisor::config::{ConfigError, ServerConfig, CONFIG_PATH_ENV};

mod support;
use support::with_scoped_env;

const CLEAN_ENV: [(&str, Option<&str>); 4] = [
    (CONFIG_PATH_ENV, None),
    ("HOST", None),
    ("PORT", None),
    ("RUST_LOG", None),
];

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file_full() {
    let file = write_config(
        r#"
host = "127.0.0.1"
port = 7100
body_limit_bytes = 2048
log_level = "debug"
"#,
    );
    let config = ServerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 7100);
    assert_eq!(config.body_limit_bytes, 2048);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_from_file_missing() {
    let result = ServerConfig::from_file("/definitely/not/here/advisor.toml");
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_from_file_invalid_toml() {
    let file = write_config("port = \"not a number\"");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_config_path_env_is_honoured() {
    let file = write_config("port = 7200");
    let path = file.path().to_str().unwrap().to_string();
    let changes = [
        (CONFIG_PATH_ENV, Some(path.as_str())),
        ("HOST", None),
        ("PORT", None),
        ("RUST_LOG", None),
    ];
    let config = with_scoped_env(&changes, ServerConfig::load).unwrap();
    assert_eq!(config.port, 7200);
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
fn test_env_overrides_file() {
    let file = write_config("host = \"10.0.0.1\"\nport = 7300\nlog_level = \"warn\"");
    let path = file.path().to_str().unwrap().to_string();
    let changes = [
        (CONFIG_PATH_ENV, Some(path.as_str())),
        ("HOST", Some("127.0.0.1")),
        ("PORT", Some("9100")),
        ("RUST_LOG", Some("trace")),
    ];
    let config = with_scoped_env(&changes, ServerConfig::load).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9100);
    assert_eq!(config.log_level, "trace");
    assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9100");
}

#[test]
fn test_invalid_port_env() {
    let changes = [(CONFIG_PATH_ENV, None), ("PORT", Some("http"))];
    let result = with_scoped_env(&changes, || ServerConfig::default().with_env_overrides());
    match result {
        Err(ConfigError::InvalidValue { key, value }) => {
            assert_eq!(key, "PORT");
            assert_eq!(value, "http");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_no_overrides_keeps_values() {
    let config = with_scoped_env(&CLEAN_ENV, || ServerConfig::default().with_env_overrides())
        .unwrap();
    assert_eq!(config, ServerConfig::default());
}
