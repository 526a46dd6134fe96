//! Session configuration
//!
//! Read from environment variables:
//!
//! - `BLOCKFALL_SEED`: RNG seed (default: random)
//! - `BLOCKFALL_MAX_DELAY_MS`: gravity delay at score 0 (default: 1000)
//! - `BLOCKFALL_MIN_DELAY_MS`: gravity delay floor (default: 75)
//! - `BLOCKFALL_DELAY_STEP_MS`: delay removed per step (default: 25)
//! - `BLOCKFALL_POINTS_PER_STEP`: score per step (default: 100)
//! - `BLOCKFALL_GRAVITY_DISABLED`: "1" or "true" to run commands only
//! - `BLOCKFALL_MAX_PENDING`: command channel capacity (default: 32)

use std::str::FromStr;

use crate::core::GravityCurve;
use crate::error::SessionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u64,
    pub gravity: GravityCurve,
    pub gravity_enabled: bool,
    pub max_pending_commands: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity: GravityCurve::default(),
            gravity_enabled: true,
            max_pending_commands: 32,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, SessionError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (environment, map, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SessionError> {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get("BLOCKFALL_SEED") {
            Some(v) => parse(&v, "BLOCKFALL_SEED")?,
            None => rand::random(),
        };

        let mut gravity = defaults.gravity;
        if let Some(v) = get("BLOCKFALL_MAX_DELAY_MS") {
            gravity.max_delay_ms = parse(&v, "BLOCKFALL_MAX_DELAY_MS")?;
        }
        if let Some(v) = get("BLOCKFALL_MIN_DELAY_MS") {
            gravity.min_delay_ms = parse(&v, "BLOCKFALL_MIN_DELAY_MS")?;
        }
        if let Some(v) = get("BLOCKFALL_DELAY_STEP_MS") {
            gravity.decrease_ms = parse(&v, "BLOCKFALL_DELAY_STEP_MS")?;
        }
        if let Some(v) = get("BLOCKFALL_POINTS_PER_STEP") {
            gravity.points_per_step = parse(&v, "BLOCKFALL_POINTS_PER_STEP")?;
        }

        let gravity_enabled = !get("BLOCKFALL_GRAVITY_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let max_pending_commands = match get("BLOCKFALL_MAX_PENDING") {
            Some(v) => parse(&v, "BLOCKFALL_MAX_PENDING")?,
            None => defaults.max_pending_commands,
        };

        let config = Self {
            seed,
            gravity,
            gravity_enabled,
            max_pending_commands,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.gravity.min_delay_ms > self.gravity.max_delay_ms {
            return Err(SessionError::config(
                "BLOCKFALL_MIN_DELAY_MS",
                format!(
                    "{} is above the max delay {}",
                    self.gravity.min_delay_ms, self.gravity.max_delay_ms
                ),
            ));
        }
        if self.gravity.points_per_step == 0 {
            return Err(SessionError::config("BLOCKFALL_POINTS_PER_STEP", "must be positive"));
        }
        if self.max_pending_commands == 0 {
            return Err(SessionError::config("BLOCKFALL_MAX_PENDING", "must be positive"));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> Result<T, SessionError> {
    value
        .parse()
        .map_err(|_| SessionError::config(key, format!("cannot parse {:?}", value)))
}
