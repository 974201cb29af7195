use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Input string is not a well-formed domain name: {0}")]
    InvalidDomainName(String),

    #[error("Input string is not a valid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("This record type is not allowed: {0}")]
    RecordTypeNotAllowed(String),

    #[error("DNS server could not be reached: {0}")]
    UpstreamUnreachable(String),

    #[error("DNS query failed with rcode: {0}")]
    UpstreamRejected(String),

    #[error("WHOIS server not found for: {0}")]
    WhoisServerNotFound(String),

    #[error("Failed to retrieve WHOIS data: {0}")]
    WhoisUnreachable(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("I/O error: {0}")]
    IoError(String),
}
