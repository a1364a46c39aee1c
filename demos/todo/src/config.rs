//! Configuration management for the todo binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroUsize;
use todo_store_runtime::StoreConfig;

/// Log filter used when neither `RUST_LOG` nor `TODO_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "todo=info,todo_store_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Tracing filter directives (`TODO_LOG`)
    pub log_filter: String,
    /// Feedback action limit per dispatch (`TODO_FEEDBACK_LIMIT`, at least 1)
    pub feedback_limit: NonZeroUsize,
    /// Todos added right after mounting (`TODO_SEED`, `;`-separated)
    pub seed: Vec<String>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            feedback_limit: StoreConfig::default().feedback_limit,
            seed: Vec::new(),
        }
    }
}

impl TodoConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults
    /// for missing or unparsable values.
    ///
    /// A feedback limit of `0` counts as unparsable: toggling feeds one
    /// update back through the store and must never be refused.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_filter: lookup("TODO_LOG").unwrap_or(defaults.log_filter),
            feedback_limit: lookup("TODO_FEEDBACK_LIMIT")
                .and_then(|s| s.parse::<NonZeroUsize>().ok())
                .unwrap_or(defaults.feedback_limit),
            seed: lookup("TODO_SEED")
                .map(|s| {
                    s.split(';')
                        .map(str::trim)
                        .filter(|text| !text.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(defaults.seed),
        }
    }

    /// Runtime configuration for the store
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.feedback_limit)
    }
}
