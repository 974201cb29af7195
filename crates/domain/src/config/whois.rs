use serde::{Deserialize, Serialize};

/// WHOIS referral walker configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoisConfig {
    /// Root WHOIS server used to bootstrap the referral chain
    #[serde(default = "default_iana_server")]
    pub iana_server: String,

    /// Bound on each WHOIS TCP exchange in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            iana_server: default_iana_server(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_iana_server() -> String {
    "whois.iana.org:43".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}
