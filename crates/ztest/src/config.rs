//! Runner configuration via environment variables
//!
//! ztest keeps its knobs in the environment so suites need no setup
//! code to honour them. Explicit builder calls override the environment.

use std::env;

/// Default `tracing` filter when `ZTEST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runner configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Disable colored report markers (ZTEST_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// `tracing` filter directive for drivers that install a subscriber (ZTEST_LOG)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var_os("ZTEST_NO_COLOR").is_some() || env::var_os("NO_COLOR").is_some(),
            log_filter: env::var("ZTEST_LOG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Configuration that never colors output, regardless of environment
    pub fn plain() -> Self {
        Self {
            no_color: true,
            ..Self::from_env()
        }
    }

    /// Override the color setting
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
