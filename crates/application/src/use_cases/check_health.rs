use crate::ports::RecordResolver;
use resolvd_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;

const PROBE_DOMAIN: &str = "iana.org.";

/// Liveness probe: the upstream resolver must answer an A query.
pub struct CheckHealthUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl CheckHealthUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self) -> Result<(), DomainError> {
        let query = DnsQuery::new(PROBE_DOMAIN, RecordType::A);
        self.resolver.resolve(&query).await.map(|_| ())
    }
}
