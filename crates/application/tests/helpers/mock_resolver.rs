use async_trait::async_trait;
use resolvd_application::ports::RecordResolver;
use resolvd_domain::{DnsQuery, DomainError, RecordType, ResourceRecord};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

/// Resolver stub with canned per-type answers. Types without an answer
/// behave like an upstream rejection. Records every query it sees.
pub struct MockResolver {
    answers: HashMap<RecordType, Vec<ResourceRecord>>,
    pub queries: Mutex<Vec<DnsQuery>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_answer(mut self, record_type: RecordType, records: Vec<ResourceRecord>) -> Self {
        self.answers.insert(record_type, records);
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordResolver for MockResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Arc<[ResourceRecord]>, DomainError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.answers.get(&query.record_type) {
            Some(records) => Ok(records.clone().into()),
            None => Err(DomainError::UpstreamRejected("NXDOMAIN".to_string())),
        }
    }

    async fn resolve_reverse(
        &self,
        ip: IpAddr,
    ) -> Result<(Arc<str>, Arc<[ResourceRecord]>), DomainError> {
        let name: Arc<str> = Arc::from(format!("{ip}.in-addr.arpa."));
        match self.answers.get(&RecordType::PTR) {
            Some(records) => Ok((name, records.clone().into())),
            None => Err(DomainError::UpstreamRejected("NXDOMAIN".to_string())),
        }
    }
}
