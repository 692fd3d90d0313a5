//! Tests for configuration file loading and resolution priority
//!
//! Tests that manipulate XDG_CONFIG_HOME are marked with #[serial]
//! so they run sequentially, not in parallel.

use album_common::config::{
    load_toml_config, ConfigOverrides, ConfigResolver, DEFAULT_HOST, DEFAULT_PORT,
};
use album_common::Error;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Should write config file");
    path
}

#[test]
fn test_load_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
host = "127.0.0.1"
port = 5800

[logging]
level = "debug"
"#,
    );

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 5800);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::new("album-directory")
        .with_config_file(Some(dir.path().join("nope.toml")));

    let result = resolver.resolve(ConfigOverrides::default());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_invalid_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = \"not a number\"");
    let resolver = ConfigResolver::new("album-directory").with_config_file(Some(path));

    let result = resolver.resolve(ConfigOverrides::default());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_cli_overrides_beat_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "host = \"0.0.0.0\"\nport = 5800");
    let resolver = ConfigResolver::new("album-directory").with_config_file(Some(path));

    let config = resolver
        .resolve(ConfigOverrides {
            host: None,
            port: Some(6000),
            log_level: None,
        })
        .unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 6000);
    assert_eq!(config.log_level, "info");
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_platform_default_file_is_used() {
    let dir = TempDir::new().unwrap();
    let module_dir = dir.path().join("album-directory-test");
    fs::create_dir_all(&module_dir).unwrap();
    fs::write(module_dir.join("config.toml"), "port = 5900").unwrap();

    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = ConfigResolver::new("album-directory-test")
        .resolve(ConfigOverrides::default());

    match previous {
        Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    let config = config.unwrap();
    assert_eq!(config.port, 5900);
    assert_eq!(config.host, DEFAULT_HOST);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_missing_platform_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = ConfigResolver::new("album-directory-test")
        .resolve(ConfigOverrides::default());

    match previous {
        Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    let config = config.unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}
