//! Decoder configuration.

use std::env;

/// Response decoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum `M`/`L` nesting depth. `None` leaves nesting unbounded.
    pub max_depth: Option<usize>,
    /// Visit `BatchGetItem` tables in ascending name order rather than map order.
    pub sort_batch_tables: bool,
}

impl DecoderConfig {
    /// Create configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DYNOPLAIN_MAX_DEPTH` | *(unset = unbounded)* |
    /// | `DYNOPLAIN_SORT_BATCH_TABLES` | `true` |
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_depth: env_depth("DYNOPLAIN_MAX_DEPTH"),
            sort_batch_tables: env_bool("DYNOPLAIN_SORT_BATCH_TABLES", true),
        }
    }

    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set whether batch tables are visited in sorted order.
    #[must_use]
    pub fn with_sorted_batch_tables(mut self, sorted: bool) -> Self {
        self.sort_batch_tables = sorted;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            sort_batch_tables: true,
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| parse_bool(&v))
}

fn parse_bool(v: &str) -> bool {
    matches!(v, "1" | "true" | "yes" | "TRUE" | "YES")
}

fn env_depth(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| parse_depth(&v))
}

// Zero or garbage means unbounded.
fn parse_depth(v: &str) -> Option<usize> {
    v.trim().parse::<usize>().ok().filter(|d| *d > 0)
}
