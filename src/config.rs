//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DASHBOARD_CHANNEL_CAPACITY` - Request buffer of the store service (default: 32)
//! - `DASHBOARD_SEED_DEMO` - Load the demo customers and orders at startup (default: true)
//! - `DASHBOARD_DEFAULT_AVATAR` - Avatar for customers created without one
//!   (default: assets/imgs/customer01.jpg)

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::DEFAULT_AVATAR;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub channel_capacity: usize,
    pub seed_demo: bool,
    pub default_avatar: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed_demo: true,
            default_avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Load configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_capacity = match vars.get("DASHBOARD_CHANNEL_CAPACITY") {
            Some(raw) => parse_capacity(raw)?,
            None => defaults.channel_capacity,
        };

        let seed_demo = match vars.get("DASHBOARD_SEED_DEMO") {
            Some(raw) => parse_bool("DASHBOARD_SEED_DEMO", raw)?,
            None => defaults.seed_demo,
        };

        let default_avatar = vars
            .get("DASHBOARD_DEFAULT_AVATAR")
            .filter(|avatar| !avatar.trim().is_empty())
            .cloned()
            .unwrap_or(defaults.default_avatar);

        Ok(Self {
            channel_capacity,
            seed_demo,
            default_avatar,
        })
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| {
        ConfigError::InvalidEnvVar("DASHBOARD_CHANNEL_CAPACITY".to_string(), reason.to_string())
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
