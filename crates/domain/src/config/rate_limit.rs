use serde::{Deserialize, Serialize};

/// Per-client rate limit: at most `limit` requests per rolling window.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            window_secs: default_window_secs(),
        }
    }
}

fn default_limit() -> u32 {
    100
}

fn default_window_secs() -> u64 {
    60
}
