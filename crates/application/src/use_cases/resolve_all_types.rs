use crate::ports::RecordResolver;
use resolvd_domain::validators;
use resolvd_domain::{DnsQuery, DomainError, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::debug;

/// Record types covered by a bare-domain query, in output order.
pub const MULTI_QUERY_ORDER: [RecordType; 6] = [
    RecordType::SOA,
    RecordType::A,
    RecordType::CNAME,
    RecordType::TXT,
    RecordType::MX,
    RecordType::NS,
];

/// Multi-type DNS query: one resolve per type in `MULTI_QUERY_ORDER`,
/// concatenating the answers. A type that fails upstream is skipped, not
/// an error; only a malformed domain fails the aggregate call.
pub struct ResolveAllTypesUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl ResolveAllTypesUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        domain: &str,
    ) -> Result<(Arc<str>, Vec<ResourceRecord>), DomainError> {
        if !validators::is_valid_domain(domain) {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }

        let fqdn: Arc<str> = Arc::from(validators::to_fqdn(domain));
        let mut answers = Vec::new();

        for record_type in MULTI_QUERY_ORDER {
            let query = DnsQuery::new(Arc::clone(&fqdn), record_type);
            match self.resolver.resolve(&query).await {
                Ok(records) => answers.extend(records.iter().cloned()),
                Err(e) => {
                    debug!(domain = %fqdn, record_type = %record_type, error = %e, "Record type skipped")
                }
            }
        }

        Ok((fqdn, answers))
    }
}
