//! Logging configuration.

use serde::{Deserialize, Serialize};

pub const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

fn default_level() -> String {
    "warn".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Fallback filter level when `MASTHEAD_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Check if `level` is one of the known tracing levels.
    #[must_use]
    pub fn is_known_level(&self) -> bool {
        LEVELS.contains(&self.level.to_ascii_lowercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(config.is_known_level());
    }

    #[test]
    fn level_check_is_case_insensitive() {
        let config = LoggingConfig {
            level: "DEBUG".into(),
        };
        assert!(config.is_known_level());

        let config = LoggingConfig {
            level: "loud".into(),
        };
        assert!(!config.is_known_level());
    }
}
