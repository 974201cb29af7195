use async_trait::async_trait;
use resolvd_domain::{DnsQuery, DomainError, ResourceRecord};
use std::net::IpAddr;
use std::sync::Arc;

/// Caching DNS resolution against the configured upstream.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// Resolves one (domain, record type) pair. The answer set is shared,
    /// not copied, between the cache and callers.
    async fn resolve(&self, query: &DnsQuery) -> Result<Arc<[ResourceRecord]>, DomainError>;

    /// Resolves the PTR records for `ip`. Returns the reverse-map name
    /// that was queried along with the answers.
    async fn resolve_reverse(
        &self,
        ip: IpAddr,
    ) -> Result<(Arc<str>, Arc<[ResourceRecord]>), DomainError>;
}
