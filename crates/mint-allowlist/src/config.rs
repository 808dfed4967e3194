//! Configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default upper bound on allowlist entries.
pub const DEFAULT_MAX_ENTRIES: usize = 65_536;

/// Environment variable overriding [`AllowlistConfig::max_entries`].
pub const MAX_ENTRIES_ENV: &str = "ALLOWLIST_MAX_ENTRIES";

/// Allowlist loading configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllowlistConfig {
    /// Loading fails once an allowlist exceeds this many addresses
    pub max_entries: usize,
}

impl Default for AllowlistConfig {
    fn default() -> Self {
        Self { max_entries: DEFAULT_MAX_ENTRIES }
    }
}

impl AllowlistConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    ///
    /// Unparseable values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_entries = match lookup(MAX_ENTRIES_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    target: "allowlist",
                    value = %raw,
                    default = DEFAULT_MAX_ENTRIES,
                    "Ignoring unparseable {MAX_ENTRIES_ENV}"
                );
                DEFAULT_MAX_ENTRIES
            }),
            None => DEFAULT_MAX_ENTRIES,
        };

        Self { max_entries }
    }
}
