//! Server configuration.

use equa_storage::DatabaseConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Everything the server needs at startup.
///
/// Loaded from an optional TOML file and then overridden field by field from
/// command-line flags or environment variables by the binary.
///
/// ```toml
/// host = "127.0.0.1"
/// port = 8080
///
/// [database]
/// url = "sqlite://equa.db"
/// max_connections = 5
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Persistence settings.
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parses a configuration from TOML text. Absent keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// `host:port` string suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
