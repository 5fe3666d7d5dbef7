//! Interpreter configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! It is read-only after startup.

use serde::{Deserialize, Serialize};
use std::env;

use hello_change_core::Cash;

use crate::command::parse_cash;
use crate::error::ArgsError;

/// Default `tracing` filter when neither `RUST_LOG` nor `HELLO_CHANGE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Line printed once before the first command is read.
pub const DEFAULT_BANNER: &str = "ready";

const LOG_VAR: &str = "HELLO_CHANGE_LOG";
const SEED_VAR: &str = "HELLO_CHANGE_SEED";
const PROMPT_VAR: &str = "HELLO_CHANGE_PROMPT";

/// Interpreter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Register contents at startup
    pub seed: Cash,

    /// Startup banner
    pub banner: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed: Cash::EMPTY,
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let seed = match lookup(SEED_VAR) {
            Some(raw) => {
                let tokens: Vec<&str> = raw.split_whitespace().collect();
                parse_cash(SEED_VAR, &tokens).map_err(|source| ConfigError::InvalidSeed {
                    key: SEED_VAR,
                    source,
                })?
            }
            None => defaults.seed,
        };

        Ok(CliConfig {
            log_filter: lookup(LOG_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            seed,
            banner: lookup(PROMPT_VAR).unwrap_or(defaults.banner),
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {source}")]
    InvalidSeed {
        key: &'static str,
        #[source]
        source: ArgsError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.banner, "ready");
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HELLO_CHANGE_LOG", "debug,hello_change_core=trace"),
            ("HELLO_CHANGE_SEED", " 1 0 2 0 3 "),
            ("HELLO_CHANGE_PROMPT", "open"),
        ])
        .unwrap();

        assert_eq!(config.log_filter, "debug,hello_change_core=trace");
        assert_eq!(config.seed.to_string(), "$33 1 0 2 0 3");
        assert_eq!(config.banner, "open");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = load(&[("HELLO_CHANGE_LOG", "  ")]).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_seed() {
        let err = load(&[("HELLO_CHANGE_SEED", "1 2 3")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSeed {
                key: "HELLO_CHANGE_SEED",
                source: ArgsError::CashArity { .. },
            }
        ));

        let err = load(&[("HELLO_CHANGE_SEED", "1 2 3 4 -5")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for HELLO_CHANGE_SEED: Command [HELLO_CHANGE_SEED] expects 5 non-negative integer arguments as cash definition: argument [-5] is negative."
        );
    }
}
