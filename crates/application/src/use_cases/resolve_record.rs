use crate::ports::RecordResolver;
use resolvd_domain::validators;
use resolvd_domain::{DnsQuery, DomainError, RecordType, ResourceRecord};
use std::sync::Arc;

/// Single-type DNS query: validate, canonicalize, resolve.
pub struct ResolveRecordUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl ResolveRecordUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the fully-qualified name actually queried together with
    /// the answer records.
    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<(Arc<str>, Arc<[ResourceRecord]>), DomainError> {
        if !record_type.is_queryable() {
            return Err(DomainError::RecordTypeNotAllowed(record_type.to_string()));
        }
        if !validators::is_valid_domain(domain) {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }

        let fqdn: Arc<str> = Arc::from(validators::to_fqdn(domain));
        let query = DnsQuery::new(Arc::clone(&fqdn), record_type);
        let records = self.resolver.resolve(&query).await?;
        Ok((fqdn, records))
    }
}
