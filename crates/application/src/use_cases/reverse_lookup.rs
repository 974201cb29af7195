use crate::ports::RecordResolver;
use resolvd_domain::{DomainError, ResourceRecord};
use std::net::IpAddr;
use std::sync::Arc;

/// PTR lookup for an IP address through the same resolver and cache.
pub struct ReverseLookupUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl ReverseLookupUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the reverse-map name queried and the PTR answers.
    pub async fn execute(
        &self,
        ip: &str,
    ) -> Result<(Arc<str>, Arc<[ResourceRecord]>), DomainError> {
        let addr: IpAddr = ip
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;
        self.resolver.resolve_reverse(addr).await
    }
}
