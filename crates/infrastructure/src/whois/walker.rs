use async_trait::async_trait;
use resolvd_application::ports::WhoisClient;
use resolvd_domain::validators;
use resolvd_domain::{DomainError, WhoisChain, WhoisHop};
use std::collections::HashSet;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Standard WHOIS port (RFC 3912)
const WHOIS_PORT: u16 = 43;

/// Line markers scanned for in replies.
const IANA_HINT: &str = "whois:";
const REFERRAL_HINT: &str = "Registrar WHOIS Server:";

/// WHOIS referral-chain walker.
///
/// Bootstraps the top-level domain's WHOIS server from the IANA root,
/// then follows `Registrar WHOIS Server:` referrals until a reply has
/// none, recording one hop per server. A server is never queried twice
/// within a chain, so a self-referring registry ends the chain after its
/// own hop. Any transport failure aborts the whole call.
pub struct WhoisWalker {
    iana_server: String,
    timeout: Duration,
}

impl WhoisWalker {
    pub fn new(iana_server: impl Into<String>, timeout: Duration) -> Self {
        Self {
            iana_server: iana_server.into(),
            timeout,
        }
    }

    /// One RFC 3912 exchange: send `request` CRLF-terminated, read until
    /// the peer closes. The whole round trip is bounded by the configured
    /// timeout.
    async fn exchange(&self, addr: &str, request: &str) -> Result<String, DomainError> {
        let round_trip = async {
            let mut stream = TcpStream::connect(addr).await?;
            stream.write_all(format!("{}\r\n", request).as_bytes()).await?;

            let mut response = Vec::new();
            stream.read_to_end(&mut response).await?;
            Ok::<_, std::io::Error>(response)
        };

        let bytes = tokio::time::timeout(self.timeout, round_trip)
            .await
            .map_err(|_| DomainError::WhoisUnreachable(format!("Timeout talking to {}", addr)))?
            .map_err(|e| DomainError::WhoisUnreachable(format!("{}: {}", addr, e)))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn bootstrap(&self, tld: &str) -> Result<String, DomainError> {
        let reply = self.exchange(&self.iana_server, tld).await?;
        scan_for(&reply, IANA_HINT).ok_or_else(|| DomainError::WhoisServerNotFound(tld.to_string()))
    }
}

#[async_trait]
impl WhoisClient for WhoisWalker {
    async fn lookup(&self, domain: &str) -> Result<WhoisChain, DomainError> {
        let tld = validators::whois_tld(domain)
            .ok_or_else(|| DomainError::InvalidDomainName(domain.to_string()))?;

        let mut server = self.bootstrap(tld).await?;
        info!(domain = domain, tld = tld, server = %server, "WHOIS bootstrap complete");

        let mut chain = WhoisChain::new();
        let mut visited: HashSet<String> = HashSet::new();

        loop {
            visited.insert(server.clone());
            let reply = self.exchange(&server_addr(&server), domain).await?;
            chain.push(WhoisHop::new(server.as_str(), reply.as_str()));

            match scan_for(&reply, REFERRAL_HINT) {
                Some(next) if !visited.contains(&next) => {
                    debug!(from = %server, to = %next, "Following WHOIS referral");
                    server = next;
                }
                Some(next) => {
                    debug!(server = %next, "Referral target already queried, chain complete");
                    break;
                }
                None => break,
            }
        }

        info!(domain = domain, hops = chain.len(), "WHOIS chain complete");
        Ok(chain)
    }
}

/// First line containing `hint`, value taken as the trimmed remainder.
fn scan_for(reply: &str, hint: &str) -> Option<String> {
    for line in reply.lines() {
        if let Some(idx) = line.find(hint) {
            let value = line[idx + hint.len()..].trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Referral hints rarely carry a port; default to the WHOIS port.
fn server_addr(server: &str) -> String {
    if server.contains(':') {
        server.to_string()
    } else {
        format!("{}:{}", server, WHOIS_PORT)
    }
}
