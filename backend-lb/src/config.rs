//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with typed
//! parsing, logging a warning and falling back to the default when a value
//! cannot be parsed.

use crate::balancer::StrategyKind;
use crate::common::error::{LbError, LbResult};
use serde::{Deserialize, Serialize};

/// Maximum number of endpoints a registry accepts by default.
pub const MAX_INSTANCES: usize = 10;

/// Environment variable for the registry capacity
pub const ENV_MAX_INSTANCES: &str = "BACKEND_LB_MAX_INSTANCES";
/// Environment variable for the selection strategy
pub const ENV_STRATEGY: &str = "BACKEND_LB_STRATEGY";
/// Environment variable for the log filter (used when `RUST_LOG` is unset)
pub const ENV_LOG_LEVEL: &str = "BACKEND_LB_LOG_LEVEL";

/// Get an environment variable
///
/// Empty values are treated as unset.
///
/// # Example
/// ```
/// use backend_lb::config::get_env;
///
/// let strategy = get_env("BACKEND_LB_STRATEGY");
/// ```
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The value returned if the variable is unset or parsing fails
///
/// # Returns
/// The parsed environment variable value or the default
pub fn get_env_parse<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = get_env(name) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                "Environment variable '{}' has invalid value '{}': {}; using default",
                name,
                raw,
                err
            );
            default
        }
    }
}

/// Registry construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of endpoints the registry accepts.
    pub max_instances: usize,
    /// Selection strategy used by `select`.
    pub strategy: StrategyKind,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_instances: MAX_INSTANCES,
            strategy: StrategyKind::default(),
        }
    }
}

impl RegistryConfig {
    /// Load registry configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_instances: get_env_parse(ENV_MAX_INSTANCES, MAX_INSTANCES),
            strategy: get_env_parse(ENV_STRATEGY, StrategyKind::default()),
        }
    }

    /// Check that the configuration can build a usable registry.
    pub fn validate(&self) -> LbResult<()> {
        if self.max_instances == 0 {
            return Err(LbError::Config(
                "max_instances must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
