use super::cache::{CacheKey, ResolutionCache};
use super::message::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Name;
use resolvd_application::ports::RecordResolver;
use resolvd_domain::validators;
use resolvd_domain::{DnsQuery, DomainError, RecordType, ResourceRecord};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Caching resolver against one configured upstream.
///
/// Queries go out over UDP; a truncated response is re-issued once over
/// TCP with the identical message bytes. There is no retry beyond that
/// single escalation, and no de-duplication of concurrent misses for the
/// same key — each performs its own upstream query.
pub struct UpstreamResolver {
    server_addr: SocketAddr,
    timeout: Duration,
    cache: Arc<ResolutionCache>,
}

impl UpstreamResolver {
    pub fn new(server_addr: SocketAddr, timeout: Duration, cache: Arc<ResolutionCache>) -> Self {
        Self {
            server_addr,
            timeout,
            cache,
        }
    }

    /// One transport attempt: send the query bytes and parse the reply.
    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        query_bytes: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let response = transport.send(query_bytes, self.timeout).await?;
        debug!(
            transport = response.protocol_used,
            bytes = response.bytes.len(),
            "Upstream exchange complete"
        );
        ResponseParser::parse(&response.bytes)
    }

    async fn query_upstream(
        &self,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let query_bytes = MessageBuilder::build_query(domain, record_type)?;

        let udp = UdpTransport::new(self.server_addr);
        let mut parsed = self.exchange(&udp, &query_bytes).await?;

        if parsed.truncated {
            let tcp = TcpTransport::new(self.server_addr);
            info!(
                domain = domain,
                record_type = %record_type,
                transport = tcp.protocol_name(),
                "Truncated response, re-issuing identical query over stream transport"
            );
            parsed = self.exchange(&tcp, &query_bytes).await?;

            // The stream transport fits any answer; a truncated reply
            // here is an upstream fault, not grounds for a third attempt.
            if parsed.truncated {
                return Err(DomainError::UpstreamRejected("TRUNCATED".to_string()));
            }
        }

        if parsed.rcode != ResponseCode::NoError {
            return Err(DomainError::UpstreamRejected(
                ResponseParser::rcode_to_status(parsed.rcode).to_string(),
            ));
        }

        Ok(parsed.records)
    }
}

#[async_trait]
impl RecordResolver for UpstreamResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Arc<[ResourceRecord]>, DomainError> {
        let key = CacheKey::new(Arc::clone(&query.domain), query.record_type);

        if let Some(records) = self.cache.lookup(&key) {
            debug!(domain = %query.domain, record_type = %query.record_type, "Cache hit");
            return Ok(records);
        }

        let records: Arc<[ResourceRecord]> = self
            .query_upstream(&query.domain, &query.record_type)
            .await?
            .into();

        self.cache.store(key, Arc::clone(&records));

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            answers = records.len(),
            "Resolved upstream"
        );

        Ok(records)
    }

    async fn resolve_reverse(
        &self,
        ip: IpAddr,
    ) -> Result<(Arc<str>, Arc<[ResourceRecord]>), DomainError> {
        let arpa: Arc<str> = Arc::from(validators::to_fqdn(&Name::from(ip).to_utf8()));
        let query = DnsQuery::new(Arc::clone(&arpa), RecordType::PTR);
        let records = self.resolve(&query).await?;
        Ok((arpa, records))
    }
}
