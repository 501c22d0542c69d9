use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RefreshConfig {
    /// Quiet period after an editor event before refetching, so backend
    /// writes settle first.
    #[serde(
        with = "humantime_serde",
        default = "RefreshConfig::default_debounce"
    )]
    pub debounce: Duration,
}

impl RefreshConfig {
    fn default_debounce() -> Duration {
        Duration::from_millis(500)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            debounce: Self::default_debounce(),
        }
    }
}
