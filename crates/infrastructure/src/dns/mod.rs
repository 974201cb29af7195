pub mod cache;
pub mod message;
pub mod record_type_map;
pub mod resolver;
pub mod transport;

pub use cache::{CacheKey, ResolutionCache};
pub use message::{DnsResponse, MessageBuilder, ResponseParser};
pub use record_type_map::RecordTypeMapper;
pub use resolver::UpstreamResolver;
