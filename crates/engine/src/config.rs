//! Session configuration from the environment.
//!
//! - `SNAKE_SEED`: RNG seed for food placement (default: derived from the clock)
//! - `SNAKE_RULES`: `standard` (default) or `legacy`

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use crate::core::Rules;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub tick_ms: u32,
    pub seed: u32,
    pub rules: Rules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: 1,
            rules: Rules::standard(),
        }
    }
}

impl SessionConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let rules = match lookup("SNAKE_RULES") {
            None => Rules::standard(),
            Some(raw) if raw.trim().is_empty() => Rules::standard(),
            Some(raw) => match Rules::from_str(&raw) {
                Some(rules) => rules,
                None => bail!(
                    "SNAKE_RULES: unknown rule set {:?} (expected \"standard\" or \"legacy\")",
                    raw
                ),
            },
        };

        Ok(Self {
            tick_ms: TICK_MS,
            seed,
            rules,
        })
    }
}

fn time_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
