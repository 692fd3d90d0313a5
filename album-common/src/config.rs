//! Bootstrap configuration loading
//!
//! Resolution priority:
//! 1. Command-line arguments / environment (collected by the binary, passed in as overrides)
//! 2. TOML config file (explicit path, else platform config directory)
//! 3. Compiled defaults
//!
//! Configuration is read once at startup; the service must restart to pick up changes.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default listen host
pub const DEFAULT_HOST: &str = "localhost";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration as read from a TOML file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// HTTP listen host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServiceConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

/// Platform config file location for a module, e.g. `~/.config/<module>/config.toml`
pub fn default_config_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(module_name).join("config.toml"))
}

/// Resolves the service configuration for one module
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    module_name: String,
    explicit_path: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            explicit_path: None,
        }
    }

    /// Use this file instead of the platform default location.
    /// A missing or invalid explicit file is an error.
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    /// Load the TOML layer
    ///
    /// The platform default file is optional: when absent or unreadable the
    /// compiled defaults are used and startup continues.
    pub fn load_file(&self) -> Result<TomlConfig> {
        if let Some(path) = &self.explicit_path {
            info!("Loading config file {}", path.display());
            return load_toml_config(path);
        }

        match default_config_path(&self.module_name) {
            Some(path) if path.exists() => {
                info!("Loading config file {}", path.display());
                match load_toml_config(&path) {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        warn!("{} (using defaults)", e);
                        Ok(TomlConfig::default())
                    }
                }
            }
            _ => {
                info!("No config file found for {}, using defaults", self.module_name);
                Ok(TomlConfig::default())
            }
        }
    }

    /// Merge overrides on top of the TOML layer
    pub fn resolve(&self, overrides: ConfigOverrides) -> Result<ServiceConfig> {
        let file = self.load_file()?;
        Ok(merge(file, overrides))
    }
}

fn merge(file: TomlConfig, overrides: ConfigOverrides) -> ServiceConfig {
    ServiceConfig {
        host: overrides.host.unwrap_or(file.host),
        port: overrides.port.unwrap_or(file.port),
        log_level: overrides.log_level.unwrap_or(file.logging.level),
    }
}
