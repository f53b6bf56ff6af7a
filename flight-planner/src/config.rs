//! Server configuration.
//!
//! Read from environment variables:
//!
//! | Variable | Default |
//! |---|---|
//! | `FLIGHT_PLANNER_ADDR` | `127.0.0.1:3000` |
//! | `FLIGHT_PLANNER_NETWORK` | unset: start with an empty network |
//! | `RUST_LOG` | `flight_planner=info` |

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

pub const ADDR_VAR: &str = "FLIGHT_PLANNER_ADDR";
pub const NETWORK_VAR: &str = "FLIGHT_PLANNER_NETWORK";
pub const LOG_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "flight_planner=info";

/// Error from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: expected host:port")]
    InvalidAddr { var: &'static str, value: String },
}

/// Configuration for the flight planner server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// JSON network file loaded at startup.
    pub network_path: Option<PathBuf>,

    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from any variable source; empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ADDR_VAR) {
            config.listen_addr = value
                .trim()
                .to_socket_addrs()
                .ok()
                .and_then(|mut addrs| addrs.next())
                .ok_or(ConfigError::InvalidAddr {
                    var: ADDR_VAR,
                    value,
                })?;
        }
        config.network_path = get(NETWORK_VAR).map(PathBuf::from);
        if let Some(filter) = get(LOG_VAR) {
            config.log_filter = filter;
        }
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.network_path, None);
        assert_eq!(config.log_filter, "flight_planner=info");
    }

    #[test]
    fn no_variables_gives_default() {
        assert_eq!(from_vars(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = from_vars(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (NETWORK_VAR, "/data/network.json"),
            (LOG_VAR, "flight_planner=trace"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.network_path, Some(PathBuf::from("/data/network.json")));
        assert_eq!(config.log_filter, "flight_planner=trace");
    }

    #[test]
    fn blank_values_are_unset() {
        let config = from_vars(&[(ADDR_VAR, "  "), (NETWORK_VAR, "")]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_address() {
        let err = from_vars(&[(ADDR_VAR, "not an address")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: "not an address".into(),
            }
        );
    }
}
