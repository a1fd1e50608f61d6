//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `NEARBITE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, POOL_SHUTDOWN_DEADLINE_MS, SEARCH_POOL_WORKERS,
};
use crate::search::PoolSettings;
use crate::service::{SearchMode, ServiceSettings};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `NEARBITE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP server port. Default: `8081`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// JSON catalog to seed the store from. Default: none (empty store).
    pub data_path: Option<PathBuf>,

    /// Whether the geo cache is consulted at all. Default: `true`.
    pub cache_enabled: bool,

    /// Lifetime of a cached geohash cell. Default: `3600` seconds.
    pub cache_ttl_secs: u64,

    /// Max cached cells. Default: `10_000`.
    pub cache_capacity: u64,

    /// Aggregator used for search terms. Default: `concurrent`.
    pub search_mode: SearchMode,

    /// Concurrent search pool size. Default: `4`.
    pub search_workers: usize,

    /// Concurrent search pool teardown deadline. Default: `800` ms.
    pub pool_shutdown_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8081,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            data_path: None,
            cache_enabled: true,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            search_mode: SearchMode::default(),
            search_workers: SEARCH_POOL_WORKERS,
            pool_shutdown_ms: POOL_SHUTDOWN_DEADLINE_MS,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "NEARBITE_PORT";
    const ENV_BIND_ADDR: &'static str = "NEARBITE_BIND_ADDR";
    const ENV_DATA_PATH: &'static str = "NEARBITE_DATA_PATH";
    const ENV_CACHE_ENABLED: &'static str = "NEARBITE_CACHE_ENABLED";
    const ENV_CACHE_TTL_SECS: &'static str = "NEARBITE_CACHE_TTL_SECS";
    const ENV_CACHE_CAPACITY: &'static str = "NEARBITE_CACHE_CAPACITY";
    const ENV_SEARCH_MODE: &'static str = "NEARBITE_SEARCH_MODE";
    const ENV_SEARCH_WORKERS: &'static str = "NEARBITE_SEARCH_WORKERS";
    const ENV_POOL_SHUTDOWN_MS: &'static str = "NEARBITE_POOL_SHUTDOWN_MS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: Self::parse_port_from_env(defaults.port)?,
            bind_addr: Self::parse_bind_addr_from_env(defaults.bind_addr)?,
            data_path: Self::parse_optional_path_from_env(Self::ENV_DATA_PATH),
            cache_enabled: Self::parse_bool_from_env(
                Self::ENV_CACHE_ENABLED,
                defaults.cache_enabled,
            )?,
            cache_ttl_secs: Self::parse_u64_from_env(
                Self::ENV_CACHE_TTL_SECS,
                defaults.cache_ttl_secs,
            )?,
            cache_capacity: Self::parse_u64_from_env(
                Self::ENV_CACHE_CAPACITY,
                defaults.cache_capacity,
            )?,
            search_mode: Self::parse_search_mode_from_env(defaults.search_mode)?,
            search_workers: Self::parse_u64_from_env(
                Self::ENV_SEARCH_WORKERS,
                defaults.search_workers as u64,
            )? as usize,
            pool_shutdown_ms: Self::parse_u64_from_env(
                Self::ENV_POOL_SHUTDOWN_MS,
                defaults.pool_shutdown_ms,
            )?,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.data_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_CACHE_TTL_SECS,
            });
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_CACHE_CAPACITY,
            });
        }
        if self.search_workers == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_SEARCH_WORKERS,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn pool_shutdown_deadline(&self) -> Duration {
        Duration::from_millis(self.pool_shutdown_ms)
    }

    /// The service-level view of this configuration.
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            cache_ttl: self.cache_ttl(),
            search_mode: self.search_mode,
            pool: PoolSettings {
                workers: self.search_workers,
                shutdown_deadline: self.pool_shutdown_deadline(),
            },
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

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_search_mode_from_env(default: SearchMode) -> Result<SearchMode, ConfigError> {
        match env::var(Self::ENV_SEARCH_MODE) {
            Ok(value) => value
                .parse()
                .map_err(|reason| ConfigError::InvalidSearchMode { value, reason }),
            Err(_) => Ok(default),
        }
    }
}
