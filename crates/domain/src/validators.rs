/// Syntax check for caller-supplied domain strings: letters, digits,
/// dots and hyphens only. Structural validation (label lengths, IDNA)
/// happens later in the DNS name codec.
pub fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

/// Appends the root label if missing, yielding the canonical query key.
pub fn to_fqdn(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}

/// Top-level label used for the IANA WHOIS bootstrap: the segment after
/// the first label, with a leading `www.` stripped. `None` when the name
/// has no such segment.
pub fn whois_tld(domain: &str) -> Option<&str> {
    let trimmed = domain.strip_prefix("www.").unwrap_or(domain);
    trimmed
        .split('.')
        .nth(1)
        .filter(|label| !label.is_empty())
}
