use async_trait::async_trait;
use resolvd_api::AppState;
use resolvd_application::ports::{RecordResolver, WhoisClient};
use resolvd_application::services::RateLimiter;
use resolvd_application::use_cases::{
    CheckHealthUseCase, ResolveAllTypesUseCase, ResolveRecordUseCase, ReverseLookupUseCase,
    WhoisLookupUseCase,
};
use resolvd_domain::{
    DnsQuery, DomainError, RecordType, ResourceRecord, WhoisChain, WhoisHop,
};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// Answers A queries with one fixed record; everything else is absent
/// upstream.
pub struct MockResolver;

#[async_trait]
impl RecordResolver for MockResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Arc<[ResourceRecord]>, DomainError> {
        match query.record_type {
            RecordType::A => Ok(vec![ResourceRecord::new(
                query.domain.to_string(),
                RecordType::A,
                "IN",
                300,
                4,
                "93.184.216.34",
            )]
            .into()),
            _ => Err(DomainError::UpstreamRejected("NXDOMAIN".to_string())),
        }
    }

    async fn resolve_reverse(
        &self,
        _ip: IpAddr,
    ) -> Result<(Arc<str>, Arc<[ResourceRecord]>), DomainError> {
        let arpa: Arc<str> = Arc::from("34.216.184.93.in-addr.arpa.");
        let records = vec![ResourceRecord::new(
            "34.216.184.93.in-addr.arpa.",
            RecordType::PTR,
            "IN",
            300,
            13,
            "example.com.",
        )];
        Ok((arpa, records.into()))
    }
}

pub struct MockWhois;

#[async_trait]
impl WhoisClient for MockWhois {
    async fn lookup(&self, domain: &str) -> Result<WhoisChain, DomainError> {
        if domain.ends_with(".invalid") {
            return Err(DomainError::WhoisServerNotFound(domain.to_string()));
        }
        Ok(vec![WhoisHop::new(
            "whois.verisign-grs.com",
            "Domain Name: EXAMPLE.COM\n",
        )])
    }
}

pub fn test_state(rate_limit: u32) -> AppState {
    let resolver: Arc<dyn RecordResolver> = Arc::new(MockResolver);
    let whois: Arc<dyn WhoisClient> = Arc::new(MockWhois);

    AppState {
        resolve_record: Arc::new(ResolveRecordUseCase::new(Arc::clone(&resolver))),
        resolve_all_types: Arc::new(ResolveAllTypesUseCase::new(Arc::clone(&resolver))),
        reverse_lookup: Arc::new(ReverseLookupUseCase::new(Arc::clone(&resolver))),
        whois_lookup: Arc::new(WhoisLookupUseCase::new(whois)),
        check_health: Arc::new(CheckHealthUseCase::new(resolver)),
        rate_limiter: Arc::new(RateLimiter::new(rate_limit, Duration::from_secs(60))),
    }
}
