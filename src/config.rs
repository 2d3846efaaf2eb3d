#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::OnceLock;

use tracing::Level;

use crate::constants::{EPSILON, LOG_ENV, TOLERANCE_ENV};

/// Runtime configuration for the judge, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgeConfig {
    /// Tolerance used when comparing answers.
    tolerance: f64,
    /// Maximum level of log output written to stderr.
    log_level: Level,
    /// Environment values that were ignored, reported once logging is up.
    ignored:   Vec<String>,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            log_level: Level::WARN,
            ignored:   Vec::new(),
        }
    }
}

impl JudgeConfig {
    /// Construct a `JudgeConfig` from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construct a `JudgeConfig` using `lookup` to resolve variables. Invalid
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut ignored = Vec::new();

        let tolerance = match lookup(TOLERANCE_ENV).map(|s| s.trim().to_owned()) {
            Some(raw) => match parse_tolerance(&raw) {
                Some(value) => value,
                None => {
                    ignored.push(format!(
                        "Ignoring {TOLERANCE_ENV}={raw:?}; expected a positive number, using {}",
                        defaults.tolerance
                    ));
                    defaults.tolerance
                }
            },
            None => defaults.tolerance,
        };

        let log_level = match lookup(LOG_ENV).map(|s| s.trim().to_owned()) {
            Some(raw) => raw.parse::<Level>().unwrap_or_else(|_| {
                ignored.push(format!("Ignoring {LOG_ENV}={raw:?}; expected a log level"));
                defaults.log_level
            }),
            None => defaults.log_level,
        };

        Self {
            tolerance,
            log_level,
            ignored,
        }
    }

    /// Returns a copy of this configuration with a different tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the comparison tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Logs a warning for every environment value that was ignored.
    pub fn warn_ignored(&self) {
        for message in &self.ignored {
            tracing::warn!("{message}");
        }
    }
}

/// Parses a tolerance, accepting only finite positive values.
pub fn parse_tolerance(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Global storage for the configuration read at startup.
static CONFIG: OnceLock<JudgeConfig> = OnceLock::new();

/// Returns the process-wide configuration, reading the environment on first
/// use.
pub fn get() -> &'static JudgeConfig {
    CONFIG.get_or_init(JudgeConfig::from_env)
}
