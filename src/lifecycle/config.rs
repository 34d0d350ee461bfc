//! Runtime settings for [`PosSystem`](super::PosSystem).
//!
//! Log verbosity is not configured here; it comes from `RUST_LOG` (see
//! [`setup_tracing`](super::setup_tracing)).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding [`PosConfig::channel_buffer`].
pub const CHANNEL_BUFFER_VAR: &str = "POS_CHANNEL_BUFFER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosConfig {
    /// Capacity of each collection's request channel.
    pub channel_buffer: usize,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self { channel_buffer: 32 }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl PosConfig {
    /// Defaults, overridden by `POS_CHANNEL_BUFFER` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: CHANNEL_BUFFER_VAR,
                        value,
                    })
                }
            };
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(PosConfig::from_lookup(|_| None).unwrap().channel_buffer, 32);
    }

    #[test]
    fn test_channel_buffer_override() {
        let config = PosConfig::from_lookup(|_| Some(" 8 ".to_string())).unwrap();
        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn test_zero_or_garbage_is_rejected() {
        for bad in ["0", "lots"] {
            assert!(matches!(
                PosConfig::from_lookup(|_| Some(bad.to_string())),
                Err(ConfigError::Invalid { .. })
            ));
        }
    }
}
