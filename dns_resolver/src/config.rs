use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::{constants, error::ConfigError};

/// Resolver settings, loadable from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Seconds to wait for each server's response
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Queries sent before giving up on a referral chain
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Id of the first query; random when unset
    #[serde(default)]
    pub initial_query_id: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_hops: default_max_hops(),
            max_response_size: default_max_response_size(),
            port: default_port(),
            initial_query_id: None,
            log_level: default_log_level(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_hops() -> usize {
    16
}

fn default_max_response_size() -> usize {
    constants::UDP_DNS_RESPONSE_SIZE
}

fn default_port() -> u16 {
    constants::DNS_PORT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ResolverConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hops == 0 {
            return Err(ConfigError::Validation(
                "max_hops must be at least 1".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.max_response_size < constants::DNS_HEADER_SIZE {
            return Err(ConfigError::Validation(format!(
                "max_response_size must be at least {} bytes",
                constants::DNS_HEADER_SIZE
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
