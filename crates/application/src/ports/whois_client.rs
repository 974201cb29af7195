use async_trait::async_trait;
use resolvd_domain::{DomainError, WhoisChain};

/// WHOIS lookup following registrar referrals across servers.
#[async_trait]
pub trait WhoisClient: Send + Sync {
    /// Walks the referral chain for `domain`, one hop per server.
    /// Transport failure at any hop fails the whole call; a referral to
    /// an already-queried server ends the chain gracefully.
    async fn lookup(&self, domain: &str) -> Result<WhoisChain, DomainError>;
}
