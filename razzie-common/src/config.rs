//! Configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Tiers 1 and 2 are parsed by the binary and handed in as
//! [`ConfigOverrides`]; this module owns tiers 3 and 4.

use crate::{Error, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server port
    pub port: u16,

    /// Interface the HTTP server binds to
    pub bind_address: String,

    /// Nominee list loaded at startup
    pub csv_path: PathBuf,

    /// SQLite database file; in-memory when absent
    pub database_path: Option<PathBuf>,

    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
            csv_path: PathBuf::from("data/movielist.csv"),
            database_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub csv_path: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
    }

    /// Parse TOML config content; missing keys take compiled defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Config file to read: the explicitly named one, else the per-user
    /// file if it exists
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|path| path.exists()),
        }
    }

    /// Load the config file, returning the file that was read
    ///
    /// An explicitly named file must exist. Without one, the per-user file is
    /// used if present; otherwise compiled defaults apply and no path is
    /// returned.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match Self::locate(explicit) {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Apply command-line and environment values over file values
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(csv_path) = overrides.csv_path {
            self.csv_path = csv_path;
        }
        if let Some(database_path) = overrides.database_path {
            self.database_path = Some(database_path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self
    }

    /// Address the HTTP server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            Error::Config(format!("Invalid bind address: {}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Per-user config file location (`~/.config/razzie/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("razzie").join("config.toml"))
}
