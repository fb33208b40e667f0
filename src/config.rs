//! Configuration management for the contact assistant.
//!
//! This module loads settings from environment variables, optionally seeded
//! from a `.env` file. Every setting has a default, so an empty environment
//! is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::services::DEFAULT_REMINDER_WINDOW_DAYS;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead the `birthdays` command looks by default (default: 7)
    pub reminder_window_days: u32,

    /// Maximum number of "did you mean" names shown (default: 3)
    pub max_name_suggestions: usize,

    /// Fuzzy match confidence threshold (0-100, default: 40)
    pub match_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Longest reminder window accepted, in days.
    pub const MAX_REMINDER_WINDOW_DAYS: u32 = 366;

    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `REMINDER_WINDOW_DAYS`: Default birthday window (default: 7, max 366)
    /// - `MAX_NAME_SUGGESTIONS`: Max suggested names on a failed lookup (default: 3)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min fuzzy match score (default: 40)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let reminder_window_days =
            Self::parse_env("REMINDER_WINDOW_DAYS", defaults.reminder_window_days)?;
        if reminder_window_days > Self::MAX_REMINDER_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "REMINDER_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", Self::MAX_REMINDER_WINDOW_DAYS),
            });
        }

        let max_name_suggestions =
            Self::parse_env("MAX_NAME_SUGGESTIONS", defaults.max_name_suggestions)?;

        let match_confidence_threshold = Self::parse_env(
            "MATCH_CONFIDENCE_THRESHOLD",
            defaults.match_confidence_threshold,
        )?;
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            reminder_window_days,
            max_name_suggestions,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("{} (got: {})", e, val),
                }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reminder_window_days: DEFAULT_REMINDER_WINDOW_DAYS,
            max_name_suggestions: 3,
            match_confidence_threshold: 40,
            log_level: "error".to_string(),
        }
    }
}
