//! Server configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables:
//!
//! - `RAIL_ADVISOR_CONFIG`: explicit path to the TOML file
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 6000)
//! - `RUST_LOG`: log level (default: info)
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 6000
//! body_limit_bytes = 1048576
//! log_level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "RAIL_ADVISOR_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    6000
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the first file found.
    ///
    /// `RAIL_ADVISOR_CONFIG` wins when set (and must exist). Otherwise
    /// `advisor.toml`, `backend/advisor.toml` and `../advisor.toml` are tried
    /// in order. With no file at all the defaults are used.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("advisor.toml"),
            PathBuf::from("backend/advisor.toml"),
            PathBuf::from("../advisor.toml"),
        ];

        match search_paths.iter().find(|p| p.exists()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `HOST`, `PORT` and `RUST_LOG` on top of the current values.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }
        if let Ok(level) = env::var("RUST_LOG") {
            self.log_level = level;
        }
        Ok(self)
    }

    /// File (or defaults) followed by environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_default_location()?.with_env_overrides()
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue {
            key: "host".to_string(),
            value: self.host.clone(),
        })
    }
}
