//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SENTINEL_*` environment variables.
//! The scoring artifacts themselves are described by the JSON file at
//! [`Config::config_path`] and loaded by [`crate::artifacts`].

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SENTINEL_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Artifact configuration file. Default: `config/config.json`.
    pub config_path: PathBuf,

    /// Buzzword list file. Default: `config/buzzwordlist.json`.
    pub buzzword_path: PathBuf,
}

/// Default artifact configuration path.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Default buzzword list path.
pub const DEFAULT_BUZZWORD_PATH: &str = "config/buzzwordlist.json";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            buzzword_path: PathBuf::from(DEFAULT_BUZZWORD_PATH),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SENTINEL_PORT";
    const ENV_BIND_ADDR: &'static str = "SENTINEL_BIND_ADDR";
    const ENV_CONFIG_PATH: &'static str = "SENTINEL_CONFIG_PATH";
    const ENV_BUZZWORD_PATH: &'static str = "SENTINEL_BUZZWORD_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let config_path = Self::parse_path_from_env(Self::ENV_CONFIG_PATH, defaults.config_path);
        let buzzword_path =
            Self::parse_path_from_env(Self::ENV_BUZZWORD_PATH, defaults.buzzword_path);

        Ok(Self {
            port,
            bind_addr,
            config_path,
            buzzword_path,
        })
    }

    /// Checks that both artifact files exist (does not parse them).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [&self.config_path, &self.buzzword_path] {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }
}
