//! Configuration structures, organized by concern:
//! - `root`: main configuration, CLI overrides, loading
//! - `server`: HTTP binding
//! - `dns`: upstream resolver and cache settings
//! - `whois`: WHOIS walker settings
//! - `rate_limit`: per-client request window
//! - `logging`: log level and sink

pub mod dns;
pub mod errors;
pub mod logging;
pub mod rate_limit;
pub mod root;
pub mod server;
pub mod whois;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rate_limit::RateLimitConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use whois::WhoisConfig;
