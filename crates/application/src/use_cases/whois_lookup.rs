use crate::ports::WhoisClient;
use resolvd_domain::validators;
use resolvd_domain::{DomainError, WhoisChain};
use std::sync::Arc;

/// WHOIS referral-chain lookup for a registered domain.
pub struct WhoisLookupUseCase {
    whois: Arc<dyn WhoisClient>,
}

impl WhoisLookupUseCase {
    pub fn new(whois: Arc<dyn WhoisClient>) -> Self {
        Self { whois }
    }

    pub async fn execute(&self, domain: &str) -> Result<WhoisChain, DomainError> {
        if !validators::is_valid_domain(domain) {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }
        self.whois.lookup(domain).await
    }
}
