use super::RecordType;
use std::sync::Arc;

/// DNS query (fully-qualified domain + record type).
/// Uses `Arc<str>` for zero-cost cloning across resolver and cache layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}
