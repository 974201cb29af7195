use super::{ConfigError, DnsConfig, LoggingConfig, RateLimitConfig, ServerConfig, WhoisConfig};
use serde::{Deserialize, Serialize};

/// Root configuration, assembled from an optional TOML file with CLI
/// overrides applied on top.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub whois: WhoisConfig,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line; each `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub query_timeout_ms: Option<u64>,
    pub upstream: Option<String>,
    pub log_file: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Config::default(),
        };

        if let Some(host) = overrides.host {
            config.server.host = host;
        }
        if let Some(port) = overrides.port {
            config.server.port = port;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            config.dns.query_timeout_ms = timeout;
        }
        if let Some(upstream) = overrides.upstream {
            config.dns.upstream = upstream;
        }
        if let Some(file) = overrides.log_file {
            config.logging.file = Some(file);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.upstream.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "dns.upstream is not a socket address: {}",
                self.dns.upstream
            )));
        }
        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "dns.query_timeout_ms must be positive".to_string(),
            ));
        }
        if self.rate_limit.limit == 0 {
            return Err(ConfigError::Invalid(
                "rate_limit.limit must be positive".to_string(),
            ));
        }
        if self.rate_limit.window_secs == 0 {
            return Err(ConfigError::Invalid(
                "rate_limit.window_secs must be positive".to_string(),
            ));
        }
        if self.whois.iana_server.is_empty() {
            return Err(ConfigError::Invalid(
                "whois.iana_server must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
