// Runtime configuration, read from the environment once at start-up.
//
// A `.env` file is honoured when present (loaded by the binary before
// `AppConfig::from_env` runs).

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
/// Extension attribute the loan broker workflow stamps on every bank offer.
pub const DEFAULT_CORRELATION_ATTRIBUTE: &str = "kogitoprocinstanceid";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is not a valid {expected}: `{value}`")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub correlation_attribute: String,
    /// Exposes `DELETE /quotes`. Keep off outside of test environments.
    pub enable_reset: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            correlation_attribute: DEFAULT_CORRELATION_ATTRIBUTE.to_string(),
            enable_reset: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("AGGREGATOR_HOST") {
            Some(host) if host.trim().is_empty() => {
                return Err(ConfigError::EmptyValue("AGGREGATOR_HOST"));
            }
            Some(host) => host.trim().to_string(),
            None => defaults.host,
        };

        let port = match lookup("AGGREGATOR_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "AGGREGATOR_PORT",
                    expected: "port number",
                    value: port,
                })?,
            None => defaults.port,
        };

        let correlation_attribute = match lookup("AGGREGATOR_CORRELATION_ATTRIBUTE") {
            Some(attribute) if attribute.trim().is_empty() => {
                return Err(ConfigError::EmptyValue("AGGREGATOR_CORRELATION_ATTRIBUTE"));
            }
            Some(attribute) => attribute.trim().to_ascii_lowercase(),
            None => defaults.correlation_attribute,
        };

        let enable_reset = match lookup("AGGREGATOR_ENABLE_RESET") {
            Some(flag) => parse_bool("AGGREGATOR_ENABLE_RESET", flag)?,
            None => defaults.enable_reset,
        };

        Ok(Self {
            host,
            port,
            correlation_attribute,
            enable_reset,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: "AGGREGATOR_HOST",
            expected: "socket address",
            value: raw,
        })
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            expected: "boolean",
            value,
        }),
    }
}
