use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Record types this service will query upstream.
///
/// PTR is reachable only through the reverse-lookup endpoint, never as a
/// caller-supplied query type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    SOA,
    MX,
    NS,
    CNAME,
    TXT,
    PTR,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::SOA => "SOA",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
        }
    }

    /// Whether callers may request this type directly.
    pub fn is_queryable(&self) -> bool {
        !matches!(self, RecordType::PTR)
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "SOA" => Ok(RecordType::SOA),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "PTR" => Ok(RecordType::PTR),
            other => Err(format!("unknown record type: {other}")),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One DNS answer entry as reported by the upstream resolver.
///
/// The TTL is the authoritative record TTL and has no relation to the
/// resolution cache's own expiry. Records are immutable once built and
/// shared by `Arc` between the cache and response serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: Arc<str>,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: Arc<str>,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        class: impl Into<Arc<str>>,
        ttl: u32,
        rdlength: u16,
        rdata: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: class.into(),
            ttl,
            rdlength,
            rdata: rdata.into(),
        }
    }
}
