use serde::{Deserialize, Serialize};

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream recursive resolver, `ip:port`
    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// End-to-end query timeout in milliseconds, covering connect and
    /// response for one transport attempt
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Fixed cache entry lifetime in seconds, independent of record TTLs
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            query_timeout_ms: default_query_timeout_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_upstream() -> String {
    "1.1.1.1:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_cache_ttl_secs() -> u64 {
    300
}
